//! Call channels.
//!
//! A [`CallChannel`] sends one named request and waits for its reply. The
//! typed client in [`crate::server`] only talks to this trait, so any
//! transport that can carry JSON values can back it.
//!
//! [`JsonStreamChannel`] speaks newline-delimited JSON-RPC over a byte stream:
//!
//! ```text
//! -> {"method":"Server.MemStatus","params":[0],"id":0}
//! <- {"id":0,"result":{...},"error":null}
//! ```

use std::io::{self, BufRead, BufReader, ErrorKind, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::{Result, RpcError};

/// A synchronous request/response channel addressed by method name.
#[cfg_attr(test, mockall::automock)]
pub trait CallChannel {
    /// Invokes `method` with `args` and returns the raw reply.
    fn call(&self, method: &str, args: Value) -> Result<Value>;
}

impl<C: CallChannel + ?Sized> CallChannel for &C {
    fn call(&self, method: &str, args: Value) -> Result<Value> {
        (**self).call(method, args)
    }
}

impl<C: CallChannel + ?Sized> CallChannel for Box<C> {
    fn call(&self, method: &str, args: Value) -> Result<Value> {
        (**self).call(method, args)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    method: &'a str,
    params: [Value; 1],
    id: u64,
}

#[derive(Deserialize)]
struct Response {
    id: u64,
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<Value>,
}

/// JSON-RPC over any bidirectional byte stream, one message per line.
///
/// Calls are serialized: a call holds the stream until its reply arrives.
#[derive(Debug)]
pub struct JsonStreamChannel<S> {
    stream: Mutex<BufReader<S>>,
    next_id: AtomicU64,
}

impl JsonStreamChannel<TcpStream> {
    /// Connects to a server's RPC listener.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;
        Ok(Self::new(stream))
    }
}

impl<S: Read + Write> JsonStreamChannel<S> {
    /// Wraps an already connected stream.
    pub fn new(stream: S) -> Self {
        Self {
            stream: Mutex::new(BufReader::new(stream)),
            next_id: AtomicU64::new(0),
        }
    }

    /// Returns the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream.into_inner().into_inner()
    }
}

impl<S: Read + Write> CallChannel for JsonStreamChannel<S> {
    fn call(&self, method: &str, args: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut request = serde_json::to_vec(&Request {
            method,
            params: [args],
            id,
        })?;
        request.push(b'\n');

        let mut stream = self.stream.lock();
        trace!(method, id, "sending request");
        stream.get_mut().write_all(&request)?;
        stream.get_mut().flush()?;

        let mut line = String::new();
        if stream.read_line(&mut line)? == 0 {
            return Err(RpcError::Transport(io::Error::new(
                ErrorKind::UnexpectedEof,
                "connection closed before reply",
            )));
        }

        let response: Response = serde_json::from_str(&line)?;
        if response.id != id {
            return Err(RpcError::Transport(io::Error::new(
                ErrorKind::InvalidData,
                format!("reply id {} does not match request id {}", response.id, id),
            )));
        }

        match response.error {
            None => Ok(response.result),
            Some(Value::String(message)) => Err(RpcError::Call {
                method: method.to_string(),
                message,
            }),
            Some(other) => Err(RpcError::Call {
                method: method.to_string(),
                message: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Cursor;

    /// In-memory stream: reads come from a canned script, writes are captured.
    struct ScriptedStream {
        input: Cursor<Vec<u8>>,
        output: Vec<u8>,
    }

    impl ScriptedStream {
        fn new(replies: &str) -> Self {
            Self {
                input: Cursor::new(replies.as_bytes().to_vec()),
                output: Vec::new(),
            }
        }
    }

    impl Read for ScriptedStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.input.read(buf)
        }
    }

    impl Write for ScriptedStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.output.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_request_framing() {
        let channel = JsonStreamChannel::new(ScriptedStream::new(
            "{\"id\":0,\"result\":[],\"error\":null}\n",
        ));
        let reply = channel.call("Server.GetPoolStats", json!(0)).unwrap();
        assert_eq!(reply, json!([]));

        let stream = channel.into_inner();
        let sent: Value = serde_json::from_slice(&stream.output).unwrap();
        assert_eq!(
            sent,
            json!({"method": "Server.GetPoolStats", "params": [0], "id": 0})
        );
        assert_eq!(stream.output.last(), Some(&b'\n'));
    }

    #[test]
    fn test_ids_increase_per_call() {
        let channel = JsonStreamChannel::new(ScriptedStream::new(
            "{\"id\":0,\"result\":1}\n{\"id\":1,\"result\":2}\n",
        ));
        assert_eq!(channel.call("A", json!(0)).unwrap(), json!(1));
        assert_eq!(channel.call("B", json!(0)).unwrap(), json!(2));
    }

    #[test]
    fn test_remote_error_is_call_error() {
        let channel = JsonStreamChannel::new(ScriptedStream::new(
            "{\"id\":0,\"result\":null,\"error\":\"rpc: can't find method\"}\n",
        ));
        match channel.call("Server.Nope", json!(0)) {
            Err(RpcError::Call { method, message }) => {
                assert_eq!(method, "Server.Nope");
                assert_eq!(message, "rpc: can't find method");
            },
            other => panic!("expected call error, got {:?}", other),
        }
    }

    #[test]
    fn test_closed_stream_is_transport_error() {
        let channel = JsonStreamChannel::new(ScriptedStream::new(""));
        match channel.call("Server.MemStatus", json!(0)) {
            Err(RpcError::Transport(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_garbled_reply_is_decode_error() {
        let channel = JsonStreamChannel::new(ScriptedStream::new("not json\n"));
        assert!(matches!(
            channel.call("Server.MemStatus", json!(0)),
            Err(RpcError::Decode(_))
        ));
    }

    #[test]
    fn test_mismatched_id_is_transport_error() {
        let channel = JsonStreamChannel::new(ScriptedStream::new("{\"id\":7,\"result\":0}\n"));
        match channel.call("Server.MemStatus", json!(0)) {
            Err(RpcError::Transport(e)) => assert_eq!(e.kind(), ErrorKind::InvalidData),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_references_and_boxes_forward() {
        fn ping<C: CallChannel>(channel: C) -> Result<Value> {
            channel.call("Server.Ping", json!(0))
        }

        let mut mock = MockCallChannel::new();
        mock.expect_call()
            .withf(|method, _| method == "Server.Ping")
            .times(2)
            .returning(|_, _| Ok(json!(true)));

        assert_eq!(ping(&mock).unwrap(), json!(true));
        assert_eq!(ping(Box::new(mock)).unwrap(), json!(true));
    }
}
