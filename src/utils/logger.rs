use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "portfolio_site=debug,info"
    } else {
        "portfolio_site=info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Log to stderr. Stdout carries the dry-run JSON and the list of written files.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_for_this_crate() {
        assert_eq!(default_directives(true), "portfolio_site=debug,info");
        assert_eq!(default_directives(false), "portfolio_site=info");
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [true, false] {
            assert!(default_directives(verbose)
                .parse::<EnvFilter>()
                .is_ok());
        }
    }
}
