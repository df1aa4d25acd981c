mod router_test;
mod settings_test;
