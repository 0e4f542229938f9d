use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Stderr spinner shown while one page is fetched.
fn page_spinner(message: String) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    let spinner = ProgressBar::new_spinner().with_style(style).with_message(message);
    spinner.enable_steady_tick(TICK_INTERVAL);
    spinner
}

/// Await `work` behind a spinner, clearing it whatever the outcome.
pub async fn while_fetching<F: Future>(message: String, work: F) -> F::Output {
    let spinner = page_spinner(message);
    let output = work.await;
    spinner.finish_and_clear();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_while_fetching_passes_through_result() {
        let ok: Result<u8, String> = while_fetching("ok".to_string(), async { Ok(7) }).await;
        let err: Result<u8, String> =
            while_fetching("err".to_string(), async { Err("boom".to_string()) }).await;

        assert_eq!(ok, Ok(7));
        assert_eq!(err, Err("boom".to_string()));
    }
}
