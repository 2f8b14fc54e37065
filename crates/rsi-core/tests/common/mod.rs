pub mod sentry_server;
