pub mod cors_server;
