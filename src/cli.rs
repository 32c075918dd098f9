use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub(crate) enum RunOutcome {
    Serve(activities::config::AppConfig),
    Exit(i32),
}

pub(crate) fn run() -> RunOutcome {
    let cli = Cli::parse();
    match resolve_config(&cli) {
        Ok(config) => RunOutcome::Serve(config),
        Err(err) => {
            eprintln!("error: {err}");
            RunOutcome::Exit(2)
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "activities",
    version,
    about = "Extracurricular activity sign-up server"
)]
struct Cli {
    #[arg(long, env = "ACTIVITIES_HOST", default_value = "127.0.0.1")]
    host: String,
    #[arg(long, env = "ACTIVITIES_PORT", default_value_t = 8000)]
    port: u16,
    #[arg(long, env = "ACTIVITIES_SCHOOL_NAME", default_value = "Mergington High School")]
    school_name: String,
    #[arg(long, env = "ACTIVITIES_SEED")]
    seed: Option<PathBuf>,
}

fn resolve_config(cli: &Cli) -> Result<activities::config::AppConfig, String> {
    let school_name = cli.school_name.trim();
    if school_name.is_empty() {
        return Err("school name cannot be empty".to_string());
    }

    let ip = parse_host(&cli.host)?;
    Ok(activities::config::AppConfig {
        addr: SocketAddr::new(ip, cli.port),
        school_name: school_name.to_string(),
        seed: cli.seed.clone(),
    })
}

fn parse_host(raw: &str) -> Result<IpAddr, String> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    value
        .parse()
        .map_err(|_| format!("invalid host '{value}'; expected an IP address or 'localhost'"))
}

#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use super::*;

    fn base_cli() -> Cli {
        Cli {
            host: "127.0.0.1".to_string(),
            port: 8000,
            school_name: "Mergington High School".to_string(),
            seed: None,
        }
    }

    #[test]
    fn parse_host__should_accept_localhost_and_ips() {
        // Then
        assert_eq!(
            parse_host("localhost").expect("localhost"),
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        );
        assert_eq!(
            parse_host("0.0.0.0").expect("any"),
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        );
        assert!(parse_host("::1").expect("ipv6").is_ipv6());
    }

    #[test]
    fn parse_host__should_reject_invalid_values() {
        // Then
        assert!(parse_host("").is_err());
        assert!(parse_host("example.com").is_err());
    }

    #[test]
    fn resolve_config__should_build_socket_addr() {
        // Given
        let mut cli = base_cli();
        cli.port = 9123;
        cli.seed = Some(PathBuf::from("seed.toml"));

        // When
        let config = resolve_config(&cli).expect("resolve config");

        // Then
        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 9123)));
        assert_eq!(config.school_name, "Mergington High School");
        assert_eq!(config.seed, Some(PathBuf::from("seed.toml")));
    }

    #[test]
    fn resolve_config__should_reject_blank_school_name() {
        // Given
        let mut cli = base_cli();
        cli.school_name = "   ".to_string();

        // When
        let result = resolve_config(&cli);

        // Then
        assert!(result.is_err());
    }
}
