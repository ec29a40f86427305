use tokio::net::UdpSocket;
use tokio::time::{sleep, timeout, Duration};

use crate::errors::{Result, TelloError};
use crate::options::TelloOptions;

// states
#[derive(Debug)]
pub struct Disconnected;

#[derive(Debug)]
pub struct Connected {
    sock: UdpSocket,
    options: TelloOptions,
}

/// A Tello EDU drone, as a typestate over the connection lifecycle.
///
/// Commands use the drone's plain-text UDP protocol - each command is a
/// single datagram, answered with `ok` or an error string.
#[derive(Debug)]
pub struct Tello<S = Disconnected> {
    state: S,
}

impl Tello<Disconnected> {
    pub fn new() -> Self {
        Self { state: Disconnected }
    }

    /// Connects to the drone using the default options.
    pub async fn connect(&self) -> Result<Tello<Connected>> {
        self.connect_with(&TelloOptions::default()).await
    }

    /// Connects to the drone and puts it in command mode.
    ///
    /// The `command` handshake is attempted a bounded number of times; if
    /// the drone never answers, connection fails rather than retrying
    /// forever.
    pub async fn connect_with(&self, options: &TelloOptions) -> Result<Tello<Connected>> {
        let local_address = &options.local_address;
        let drone_address = &options.drone_address;

        println!("[Tello] CONNECT {local_address} → {drone_address}");

        println!("[Tello] binding local {local_address}...");
        let sock = UdpSocket::bind(local_address).await?;
        sock.connect(drone_address).await?;

        let drone = Tello {
            state: Connected { sock, options: options.clone() },
        };

        println!("[Tello] putting drone in command mode...");
        let mut i = 0;
        loop {
            i += 1;
            match drone.send("command").await {
                Ok(_) => break,
                Err(err @ TelloError::CommandFailed { .. }) => return Err(err),
                Err(err) => {
                    println!("[Tello] connection attempt #{i} failed ({err})");
                    if i >= options.connect_attempts {
                        return Err(TelloError::ConnectFailed { attempts: i });
                    }
                    sleep(Duration::from_millis(100)).await;
                }
            }
        }

        println!("[Tello] CONNECTED");

        Ok(drone)
    }
}

impl Default for Tello<Disconnected> {
    fn default() -> Self {
        Self::new()
    }
}

impl Tello<Connected> {
    /// Sends a raw command and waits for the reply, requiring `ok` for
    /// anything that is not a read command.
    pub async fn send(&self, msg: &str) -> Result<String> {
        println!("[Tello] SEND {msg}");
        let s = &self.state.sock;
        s.send(msg.as_bytes()).await?;

        let mut buf = vec![0; 256];
        let wait = self.state.options.response_timeout;
        let n = match timeout(wait, s.recv(&mut buf)).await {
            Ok(received) => received?,
            Err(_) => {
                return Err(TelloError::Timeout {
                    command: msg.to_string(),
                    timeout_millis: wait.as_millis(),
                })
            }
        };

        buf.truncate(n);
        let response = String::from_utf8(buf)?.trim().to_string();

        println!("[Tello] RECEIVED {response}");

        if !msg.ends_with('?') && response != "ok" {
            return Err(TelloError::CommandFailed {
                command: msg.to_string(),
                response,
            });
        }

        Ok(response)
    }

    pub async fn take_off(&self) -> Result<()> {
        self.send("takeoff").await?;
        Ok(())
    }

    pub async fn land(&self) -> Result<()> {
        self.send("land").await?;
        Ok(())
    }

    pub async fn move_left(&self, cm: u32) -> Result<()> {
        self.send(&format!("left {cm}")).await?;
        Ok(())
    }

    pub async fn move_right(&self, cm: u32) -> Result<()> {
        self.send(&format!("right {cm}")).await?;
        Ok(())
    }

    pub async fn move_forward(&self, cm: u32) -> Result<()> {
        self.send(&format!("forward {cm}")).await?;
        Ok(())
    }

    pub async fn move_back(&self, cm: u32) -> Result<()> {
        self.send(&format!("back {cm}")).await?;
        Ok(())
    }

    pub async fn move_up(&self, cm: u32) -> Result<()> {
        self.send(&format!("up {cm}")).await?;
        Ok(())
    }

    pub async fn move_down(&self, cm: u32) -> Result<()> {
        self.send(&format!("down {cm}")).await?;
        Ok(())
    }

    /// Queries the battery charge, as a percentage.
    pub async fn battery(&self) -> Result<u8> {
        let response = self.send("battery?").await?;
        value_as(&response)
    }

    /// Ends the session, releasing the command socket.
    pub async fn end(self) -> Result<()> {
        println!("[Tello] END");
        drop(self.state.sock);
        Ok(())
    }
}

fn value_as<T: std::str::FromStr>(s: &str) -> Result<T> {
    s.parse::<T>()
        .map_err(|_| TelloError::ParseError { msg: s.to_string() })
}
