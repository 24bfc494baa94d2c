use crate::error::PipelineError;
use crate::DrsGenerator;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Write};
use std::net::TcpStream;
use std::time::Duration;
use tracing::{info, warn};

// ── JSON Lines protocol types ──

#[derive(Serialize)]
struct GenerateRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    drs: Option<String>,
    error: Option<String>,
}

/// Client for an external sentence → DRS model server.
///
/// One JSON object per line in each direction. The connection is opened
/// lazily on first use and reopened once if a request fails mid-flight.
pub struct ModelBackend {
    addr: Option<String>,
    conn: Option<BufReader<TcpStream>>,
}

impl ModelBackend {
    pub fn new(addr: Option<String>) -> Self {
        Self { addr, conn: None }
    }

    pub fn addr(&self) -> Option<&str> {
        self.addr.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Point at a new server; the old connection is dropped.
    pub fn set_addr(&mut self, addr: String) {
        self.conn = None;
        self.addr = Some(addr);
    }

    fn connect(&mut self) -> Result<(), PipelineError> {
        if self.conn.is_some() {
            return Ok(());
        }
        let addr = self.addr.as_deref().ok_or(PipelineError::NotConfigured)?;
        let stream = TcpStream::connect(addr).map_err(|source| PipelineError::Connect {
            addr: addr.to_string(),
            source,
        })?;
        stream.set_read_timeout(Some(Duration::from_secs(10)))?;
        stream.set_write_timeout(Some(Duration::from_secs(5)))?;
        stream.set_nodelay(true)?;
        info!(addr, "connected to DRS model backend");
        self.conn = Some(BufReader::new(stream));
        Ok(())
    }

    /// Ask the backend for the DRS of one sentence.
    /// On a transport failure, drops the connection and retries once.
    pub fn request(&mut self, text: &str) -> Result<String, PipelineError> {
        if self.addr.is_none() {
            return Err(PipelineError::NotConfigured);
        }

        let mut payload = serde_json::to_string(&GenerateRequest { text })?;
        payload.push('\n');

        match self.try_request(&payload) {
            Err(PipelineError::Backend(message)) => Err(PipelineError::Backend(message)),
            Err(first_err) => {
                warn!(error = %first_err, "backend request failed, reconnecting");
                self.conn = None;
                self.try_request(&payload)
            }
            ok => ok,
        }
    }

    fn try_request(&mut self, payload: &str) -> Result<String, PipelineError> {
        self.connect()?;
        let reader = self.conn.as_mut().ok_or(PipelineError::NotConfigured)?;

        reader.get_mut().write_all(payload.as_bytes())?;
        reader.get_mut().flush()?;

        let mut line = String::new();
        reader.read_line(&mut line)?;

        let resp: GenerateResponse = serde_json::from_str(&line)?;
        match (resp.error, resp.drs) {
            (Some(err), _) => Err(PipelineError::Backend(err)),
            (None, Some(drs)) => Ok(drs),
            (None, None) => Err(PipelineError::EmptyResponse),
        }
    }
}

impl DrsGenerator for ModelBackend {
    fn generate(&mut self, premise: &str) -> Result<String, PipelineError> {
        self.request(premise)
    }
}
