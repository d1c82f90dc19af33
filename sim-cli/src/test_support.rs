//! Helpers shared by the session tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::Level;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Log sink shared between a test and its subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

pub struct CapturedWriter<'a>(MutexGuard<'a, Vec<u8>>);

impl Write for CapturedWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.lock().unwrap())
    }
}

impl CapturedLogs {
    /// Captures events at `level` and above until the guard drops.
    pub fn install(
        &self,
        level: Level,
    ) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(self.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}
