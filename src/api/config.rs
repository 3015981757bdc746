use clap::{ArgAction, Args};

#[derive(Args, Debug, Clone)]
pub struct ApiConfig {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long, env = "PORT", default_value_t = 8082)]
    pub port: u16,
    /// Serve the GraphiQL explorer on `GET /graphql`.
    #[arg(long, env = "GRAPHIQL", default_value_t = true, action = ArgAction::Set)]
    pub graphiql: bool,
}

impl ApiConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8082,
            graphiql: true,
        }
    }
}
