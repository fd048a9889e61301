use clap::Parser;

#[derive(Parser, Debug)]
pub struct FlatConfig {
    #[arg(
        env = "DATABASE_URL",
        default_value = "sqlite://arteca.db?mode=rwc",
        help = "SQLite connection string"
    )]
    database_url: String,

    #[arg(
        env = "LISTEN_ADDR",
        default_value = "[::]:9000",
        help = "Address the HTTP server binds to"
    )]
    listen_addr: String,

    #[arg(
        env = "ART_PLACEHOLDER_URL",
        default_value = "https://arteca.example.com/images/art_placeholder.jpg",
        help = "Fallback image served for arts without a stored image"
    )]
    art_placeholder_url: String,

    #[arg(
        env = "ARTIST_PLACEHOLDER_URL",
        default_value = "https://arteca.example.com/images/artist_placeholder.jpg",
        help = "Fallback image served for artists without a stored image"
    )]
    artist_placeholder_url: String,
}

#[derive(Debug)]
pub struct Config {
    pub db: DbConfiguration,
    pub http: HttpConfiguration,
    pub images: ImageConfiguration,
}

#[derive(Debug)]
pub struct DbConfiguration {
    pub database_url: String, // DATABASE_URL
}

#[derive(Debug)]
pub struct HttpConfiguration {
    pub listen_addr: String, // LISTEN_ADDR
}

#[derive(Debug)]
pub struct ImageConfiguration {
    pub art_placeholder_url: String,    // ART_PLACEHOLDER_URL
    pub artist_placeholder_url: String, // ARTIST_PLACEHOLDER_URL
}

impl From<FlatConfig> for Config {
    fn from(value: FlatConfig) -> Self {
        Config {
            db: DbConfiguration {
                database_url: value.database_url,
            },
            http: HttpConfiguration {
                listen_addr: value.listen_addr,
            },
            images: ImageConfiguration {
                art_placeholder_url: value.art_placeholder_url,
                artist_placeholder_url: value.artist_placeholder_url,
            },
        }
    }
}
