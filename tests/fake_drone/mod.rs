use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::net::UdpSocket;
use tokio::task;
use tokio::time::Duration;

use tello_flight::TelloOptions;

/// Reply value meaning "do not answer at all", to force a timeout.
pub const SILENCE: &str = "<silence>";

/// A stand-in drone on localhost: records every command datagram it
/// receives and answers from a reply table, defaulting to `ok`.
pub struct FakeDrone {
    address: String,
    commands: Arc<Mutex<Vec<String>>>,
    task: task::JoinHandle<()>,
}

impl FakeDrone {
    /// Starts a fake drone that answers `ok` to everything.
    pub async fn start() -> anyhow::Result<Self> {
        Self::with_replies(HashMap::new()).await
    }

    /// Starts a fake drone with canned replies, keyed by the first word
    /// of the command (`"forward"`, `"battery?"`, ...).
    pub async fn with_replies(replies: HashMap<&'static str, &'static str>) -> anyhow::Result<Self> {
        let sock = UdpSocket::bind("127.0.0.1:0").await?;
        let address = format!("127.0.0.1:{}", sock.local_addr()?.port());

        let commands = Arc::new(Mutex::new(Vec::new()));
        let recorded = commands.clone();

        let task = tokio::spawn(async move {
            let mut buf = vec![0; 256];
            loop {
                let (n, from) = sock.recv_from(&mut buf).await.unwrap();
                let command = String::from_utf8(buf[..n].to_vec()).unwrap();

                recorded.lock().unwrap().push(command.clone());

                let key = command.split_whitespace().next().unwrap_or("");
                let reply = replies.get(key).copied().unwrap_or("ok");
                if reply != SILENCE {
                    sock.send_to(reply.as_bytes(), from).await.unwrap();
                }
            }
        });

        Ok(Self { address, commands, task })
    }

    /// Connection options pointing at this fake drone, with timings short
    /// enough to keep failure tests quick.
    pub fn options(&self) -> TelloOptions {
        TelloOptions {
            drone_address: self.address.clone(),
            local_address: "127.0.0.1:0".to_string(),
            response_timeout: Duration::from_millis(500),
            connect_attempts: 2,
        }
    }

    /// Every command received so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl Drop for FakeDrone {
    fn drop(&mut self) {
        self.task.abort();
    }
}
