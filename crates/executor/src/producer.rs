use log::info;
use tokio::sync::mpsc::Sender;

use super::{
    error::Error,
    types::{BenchmarkRecord, RecordStreamer},
};

pub struct Producer<S: RecordStreamer> {
    streamer: S,
}

impl<S> Producer<S>
where
    S: RecordStreamer,
{
    pub fn new(streamer: S) -> Self {
        Producer { streamer }
    }

    pub fn spawn(
        self,
        sender: Sender<BenchmarkRecord>,
    ) -> tokio::task::JoinHandle<Result<(), Error>> {
        info!("Producer ready.");
        tokio::spawn(async move { self.streamer.run_stream(sender).await })
    }
}
