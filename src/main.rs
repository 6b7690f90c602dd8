use anyhow::{Context, Result};
use cardmark::{Config, LinkCardRenderer};

fn main() -> Result<()> {
    let config = Config::parse();
    cardmark::initialize_logging(&config).context("Failed to initialize logging")?;
    config.validate().context("Invalid configuration")?;

    if let Some(url) = &config.card {
        let renderer = LinkCardRenderer::new(config.link_card_options())
            .context("Failed to initialize link card renderer")?;
        println!("{}", renderer.render(url));
        return Ok(());
    }

    let pages = cardmark::generate_site(&config).context("Failed to generate site")?;

    println!(
        "Generated {} page(s) in {}",
        pages.len(),
        config.output.display()
    );

    Ok(())
}
