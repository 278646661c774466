use crate::{config::Config, error::AppError, publish::BrokerSession};

/// Connects to the AMQP broker and opens the publishing channel.
///
/// Establishes the broker connection using the URL and client identity from
/// configuration. This function must complete successfully before any message
/// can be published; a failure here terminates the generator during startup.
///
/// # Arguments
/// - `config` - Application configuration containing the broker URL, client id and channel name
///
/// # Returns
/// - `Ok(BrokerSession)` - Established broker session
/// - `Err(Error)` - Failed to connect or open the channel
pub async fn connect_to_broker(config: &Config) -> Result<BrokerSession, AppError> {
    let session =
        BrokerSession::connect(&config.broker_url, &config.client_id, &config.channel_name).await?;

    Ok(session)
}
