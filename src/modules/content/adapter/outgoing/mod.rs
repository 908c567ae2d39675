mod cosmic_http_client;

pub use cosmic_http_client::CosmicHttpClient;
