//! Command-line interface.

mod render;
mod serve;

use std::net::IpAddr;

use clap::{Parser, Subcommand};

pub use render::run_render_command;
pub use serve::run_serve_command;

#[derive(Parser, Debug)]
#[command(name = "recap", version, about = "Year-in-review story generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the web gateway (default).
    Serve {
        /// Bind address (overrides RECAP_HOST)
        #[arg(long)]
        host: Option<IpAddr>,

        /// Bind port (overrides RECAP_PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate one review and print it.
    Render {
        /// Profile URL or bare handle
        profile: String,

        /// Print the full bundle as JSON instead of the story
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["recap"]).unwrap();
        assert_eq!(cli.command(), Command::Serve { host: None, port: None });
    }

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::try_parse_from(["recap", "serve", "--host", "0.0.0.0", "-p", "8080"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Serve {
                host: Some("0.0.0.0".parse().unwrap()),
                port: Some(8080),
            }
        );
    }

    #[test]
    fn render_takes_profile_and_json_flag() {
        let cli = Cli::try_parse_from(["recap", "render", "jane-doe", "--json"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Render {
                profile: "jane-doe".to_string(),
                json: true,
            }
        );
    }

    #[test]
    fn render_requires_profile() {
        assert!(Cli::try_parse_from(["recap", "render"]).is_err());
    }
}
