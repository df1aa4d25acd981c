mod application;
mod domain;
mod infrastructure;
mod presentation;
mod support;
