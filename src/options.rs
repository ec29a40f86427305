use tokio::time::Duration;

const DEFAULT_DRONE_HOST: &str = "192.168.10.1";

const CONTROL_UDP_PORT: u16 = 8889;

/// Tello drone connection options.
#[derive(Debug, Clone)]
pub struct TelloOptions {
    /// Address of the drone's command endpoint.
    pub drone_address: String,

    /// Local address to bind the command socket to.
    pub local_address: String,

    /// How long to wait for the drone to answer a command. Movement
    /// commands only reply once the move has finished, so this needs to
    /// allow for the whole manoeuvre.
    pub response_timeout: Duration,

    /// How many times to try reaching the drone before giving up.
    pub connect_attempts: u32,
}

impl Default for TelloOptions {
    fn default() -> Self {
        Self {
            drone_address: format!("{DEFAULT_DRONE_HOST}:{CONTROL_UDP_PORT}"),
            local_address: format!("0.0.0.0:{CONTROL_UDP_PORT}"),
            response_timeout: Duration::from_secs(10),
            connect_attempts: 3,
        }
    }
}
