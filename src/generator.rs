//! The publish loop driving synthetic order traffic.
//!
//! Every tick draws one fixture at random, prepares its payload and sends it
//! to the broker. The loop runs until cancelled and treats publish failures
//! as transient, logging them and carrying on with the next tick.

use std::time::Duration;

use rand::{rngs::StdRng, SeedableRng};
use tokio_util::sync::CancellationToken;

use crate::{error::AppError, fixture::FixtureSet, message, publish::Publisher};

/// Runs the publish loop until cancelled or a fatal error occurs.
///
/// Each iteration draws one fixture uniformly at random over manifest slots,
/// prepares its payload and publishes it, then waits out the interval. The
/// first publish happens immediately. Publish failures are logged and the
/// loop keeps going, so a broker hiccup costs at most the ticks it overlaps.
/// Broken fixture data is not survivable: a fixture tagged for `order_uid`
/// injection that fails to parse stops the loop with an error.
///
/// Cancellation is checked between ticks, so an in-flight publish finishes
/// before the loop stops.
///
/// # Arguments
/// - `fixtures` - Loaded fixture set to draw from
/// - `publisher` - Sink the prepared payloads go to
/// - `interval` - Delay between consecutive publishes
/// - `shutdown` - Token that stops the loop
///
/// # Returns
/// - `Ok(())` - Loop stopped in response to cancellation
/// - `Err(AppError)` - A fixture tagged for injection could not be parsed
pub async fn run_publish_loop<P: Publisher>(
    fixtures: FixtureSet,
    publisher: P,
    interval: Duration,
    shutdown: CancellationToken,
) -> Result<(), AppError> {
    // StdRng rather than the thread-local rng: the loop holds it across awaits.
    let mut rng = StdRng::from_os_rng();
    let mut ticks: u64 = 0;

    loop {
        let Some(fixture) = fixtures.pick(&mut rng) else {
            return Ok(());
        };
        let payload = message::build_payload(fixture)?;
        ticks += 1;

        match publisher.publish(&payload).await {
            Ok(()) => tracing::info!("Message published: {} (tick {})", fixture.name, ticks),
            Err(e) => tracing::error!("Error posting message: {}", e),
        }

        tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                tracing::info!("Publish loop stopped");
                return Ok(());
            }
            _ = tokio::time::sleep(interval) => {}
        }
    }
}
