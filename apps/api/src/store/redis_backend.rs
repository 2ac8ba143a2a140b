use std::sync::Mutex;
use std::time::Duration;

use redis::{Client, Commands, Connection, RedisResult};
use tokio::runtime::{Handle, RuntimeFlavor};
use tracing::debug;

use crate::store::backend::{StorageBackend, StorageError};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Slots stored as plain Redis strings over one long-lived synchronous
/// connection. A command error drops the connection; the next command
/// reconnects.
pub struct RedisBackend {
    client: Client,
    conn: Mutex<Option<Connection>>,
}

impl RedisBackend {
    pub fn open(url: &str) -> Result<Self, StorageError> {
        let client = Client::open(url)?;
        let backend = Self {
            client,
            conn: Mutex::new(None),
        };
        // Fail at startup rather than on the first write.
        backend.with_connection(|conn| redis::cmd("PING").query::<String>(conn))?;
        Ok(backend)
    }

    fn connect(&self) -> RedisResult<Connection> {
        let conn = self.client.get_connection_with_timeout(CONNECT_TIMEOUT)?;
        conn.set_read_timeout(Some(IO_TIMEOUT))?;
        conn.set_write_timeout(Some(IO_TIMEOUT))?;
        debug!("Opened Redis connection");
        Ok(conn)
    }

    fn with_connection<T>(
        &self,
        op: impl FnOnce(&mut Connection) -> RedisResult<T>,
    ) -> Result<T, StorageError> {
        run_blocking(|| {
            let mut slot = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
            let mut conn = match slot.take() {
                Some(conn) => conn,
                None => self.connect()?,
            };
            let result = op(&mut conn);
            if result.is_ok() {
                *slot = Some(conn);
            }
            Ok(result?)
        })
    }
}

impl StorageBackend for RedisBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_connection(|conn| conn.get(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_connection(|conn| conn.set::<_, _, ()>(key, value))
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}

/// Runs blocking I/O without stalling other tasks on a multi-threaded
/// runtime. Current-thread runtimes and plain threads run it inline.
fn run_blocking<T>(f: impl FnOnce() -> T) -> T {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(f)
        }
        _ => f(),
    }
}
