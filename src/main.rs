use pricing_scraper_lib::{logger, Extractor, Fetcher, Pipeline, PipelineOutcome, ScrapeConfig};

use log::{error, info};

const RULE: &str = "============================================================";

fn main() {
    logger::init();
    info!("{}", RULE);
    info!("AUTOMATED PRICING DATA SCRAPER");
    info!("{}", RULE);

    let config = match ScrapeConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };

    let fetcher = match Fetcher::new(&config) {
        Ok(f) => f,
        Err(e) => {
            error!("Could not set up HTTP client: {}", e);
            return;
        }
    };
    let extractor = match Extractor::new() {
        Ok(x) => x,
        Err(e) => {
            error!("Could not set up extractor: {}", e);
            return;
        }
    };

    let pipeline = Pipeline::new(fetcher, extractor);
    let outcome = pipeline.run(&config.url, &config.output_path);

    if let PipelineOutcome::Written { .. } = outcome {
        info!("{}", RULE);
        info!("✓ Pipeline completed successfully!");
        info!("{}", RULE);
    }
}
