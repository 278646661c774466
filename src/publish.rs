//! Broker session management and publishing.
//!
//! This module owns the AMQP side of the generator: a `BrokerSession` wraps
//! the connection for its whole lifetime, and a `ChannelPublisher` sends
//! payloads to the configured queue through the default exchange. The
//! `Publisher` trait is the seam the publish loop runs against, keeping it
//! independent of a live broker.

use async_trait::async_trait;
use lapin::{options::*, BasicProperties, Channel, Connection, ConnectionProperties};

/// Sink for prepared payloads.
///
/// The publish loop only needs this one operation, so it takes any publisher
/// rather than a broker channel directly.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes one payload.
    async fn publish(&self, payload: &[u8]) -> Result<(), lapin::Error>;
}

/// An open broker connection and the publisher bound to its channel.
///
/// The session stays alive for the lifetime of the generator and is closed
/// explicitly on shutdown so the broker sees a clean disconnect.
pub struct BrokerSession {
    connection: Connection,
    publisher: ChannelPublisher,
}

/// Publishes payloads to a named queue over an AMQP channel.
///
/// Messages go through the default exchange with the queue name as routing
/// key. Cloning is cheap; clones share the underlying channel.
#[derive(Clone)]
pub struct ChannelPublisher {
    channel: Channel,
    channel_name: String,
}

impl BrokerSession {
    /// Connects to the broker and opens the publishing channel.
    ///
    /// # Arguments
    /// - `url` - AMQP connection URL
    /// - `client_id` - Connection name reported to the broker
    /// - `channel_name` - Queue the publisher sends to
    ///
    /// # Returns
    /// - `BrokerSession` - Established session ready for publishing
    pub async fn connect(
        url: &str,
        client_id: &str,
        channel_name: &str,
    ) -> Result<Self, lapin::Error> {
        let options =
            ConnectionProperties::default().with_connection_name(client_id.to_string().into());
        let connection = Connection::connect(url, options).await?;
        let channel = connection.create_channel().await?;

        Ok(Self {
            connection,
            publisher: ChannelPublisher {
                channel,
                channel_name: channel_name.to_string(),
            },
        })
    }

    /// Returns a publisher bound to this session's channel.
    pub fn publisher(&self) -> ChannelPublisher {
        self.publisher.clone()
    }

    /// Closes the connection with a normal shutdown status.
    pub async fn close(self) -> Result<(), lapin::Error> {
        self.connection.close(200, "Normal shutdown").await
    }
}

#[async_trait]
impl Publisher for ChannelPublisher {
    async fn publish(&self, payload: &[u8]) -> Result<(), lapin::Error> {
        self.channel
            .basic_publish(
                "",
                &self.channel_name,
                BasicPublishOptions::default(),
                payload,
                BasicProperties::default(),
            )
            .await?;

        Ok(())
    }
}
