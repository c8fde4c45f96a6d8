use hickory_proto::op::Message;
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// A request as the mock server saw it.
#[derive(Clone)]
pub struct ReceivedRequest {
    pub bytes: Vec<u8>,
    pub message: Message,
}

type Requests = Arc<Mutex<Vec<ReceivedRequest>>>;

fn record(requests: &Requests, bytes: &[u8]) -> Option<Message> {
    let message = Message::from_vec(bytes).ok()?;
    requests.lock().unwrap().push(ReceivedRequest {
        bytes: bytes.to_vec(),
        message: message.clone(),
    });
    Some(message)
}

/// Length-prefixed DNS over TCP on loopback.
///
/// For every request the handler returns the messages to stream back; an
/// empty list keeps the connection open without answering. The connection
/// is closed once the messages are written.
pub struct MockTcpDnsServer {
    addr: SocketAddr,
    requests: Requests,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockTcpDnsServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Message) -> Vec<Message> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        Self::serve(listener, handler)
    }

    /// Same as `start`, listening on a given port (to pair with a UDP mock).
    pub async fn start_on<F>(port: u16, handler: F) -> Self
    where
        F: Fn(&Message) -> Vec<Message> + Send + Sync + 'static,
    {
        let listener = TcpListener::bind(("127.0.0.1", port)).await.unwrap();
        Self::serve(listener, handler)
    }

    fn serve<F>(listener: TcpListener, handler: F) -> Self
    where
        F: Fn(&Message) -> Vec<Message> + Send + Sync + 'static,
    {
        let addr = listener.local_addr().unwrap();
        let requests: Requests = Arc::default();
        let handler = Arc::new(handler);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let handler = handler.clone();
                        let seen = seen.clone();
                        tokio::spawn(async move {
                            let mut len_buf = [0u8; 2];
                            if stream.read_exact(&mut len_buf).await.is_err() {
                                return;
                            }
                            let mut body = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                            if stream.read_exact(&mut body).await.is_err() {
                                return;
                            }
                            let Some(request) = record(&seen, &body) else { return };

                            let responses = handler(&request);
                            if responses.is_empty() {
                                let mut sink = Vec::new();
                                let _ = stream.read_to_end(&mut sink).await;
                                return;
                            }
                            for response in responses {
                                let bytes = response.to_vec().unwrap();
                                let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&bytes).await;
                            }
                            let _ = stream.flush().await;
                        });
                    }
                }
            }
        });

        Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockTcpDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// DNS over UDP on loopback. A handler returning `None` drops the query.
pub struct MockUdpDnsServer {
    addr: SocketAddr,
    requests: Requests,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUdpDnsServer {
    pub async fn start<F>(handler: F) -> Self
    where
        F: Fn(&Message) -> Option<Message> + Send + Sync + 'static,
    {
        Self::start_on(0, handler).await
    }

    pub async fn start_on<F>(port: u16, handler: F) -> Self
    where
        F: Fn(&Message) -> Option<Message> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(("127.0.0.1", port)).await.unwrap();
        let addr = socket.local_addr().unwrap();
        let requests: Requests = Arc::default();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let seen = requests.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Some(request) = record(&seen, &buf[..len]) else { continue };
                        if let Some(response) = handler(&request) {
                            let _ = socket.send_to(&response.to_vec().unwrap(), peer).await;
                        }
                    }
                }
            }
        });

        Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn requests(&self) -> Vec<ReceivedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockUdpDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
