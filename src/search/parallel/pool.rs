//! Fixed pool of expansion workers living for a single solve.

use crate::cube::MoveSet;
use crate::search::frontier::{Expansion, expand_shard};
use crate::search::parallel::channel::{
    CoordinatorMessage, StopSignal, WorkerChannels, WorkerMessage, create_channels,
};
use crate::search::solver::SolveError;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Worker threads plus the coordinator's ends of their channels.
///
/// Dropping the pool raises the stop flag so in-flight shards are abandoned,
/// sends `Stop` to every worker, drops the senders and joins the threads.
pub struct WorkerPool {
    to_workers: Vec<Sender<CoordinatorMessage>>,
    from_workers: Receiver<WorkerMessage>,
    stop: Arc<StopSignal>,
    handles: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawn `num_workers` threads (at least one) expanding with `move_set`.
    pub fn spawn(num_workers: usize, move_set: MoveSet) -> Self {
        let num_workers = num_workers.max(1);
        let (coordinator_channels, worker_channels) = create_channels(num_workers);

        let handles = worker_channels
            .into_iter()
            .enumerate()
            .map(|(worker_id, channels)| {
                std::thread::spawn(move || run_worker(worker_id, move_set, channels))
            })
            .collect();

        debug!("Spawned {} workers", num_workers);

        Self {
            to_workers: coordinator_channels.to_workers,
            from_workers: coordinator_channels.from_workers,
            stop: coordinator_channels.stop,
            handles,
        }
    }

    pub fn size(&self) -> usize {
        self.to_workers.len()
    }

    /// Hand a message to one worker.
    pub fn dispatch(
        &self,
        worker_id: usize,
        message: CoordinatorMessage,
    ) -> Result<(), SolveError> {
        self.to_workers
            .get(worker_id)
            .ok_or(SolveError::PoolDisconnected)?
            .send(message)
            .map_err(|_| SolveError::PoolDisconnected)
    }

    /// Block until some worker answers.
    pub fn recv(&self) -> Result<WorkerMessage, SolveError> {
        self.from_workers
            .recv()
            .map_err(|_| SolveError::PoolDisconnected)
    }

    /// Stop and join every worker.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop.signal_stop();
        for tx in &self.to_workers {
            let _ = tx.send(CoordinatorMessage::Stop);
        }
        self.to_workers.clear();

        for handle in self.handles.drain(..) {
            if handle.join().is_err() {
                warn!("Worker thread exited abnormally");
            }
        }
        debug!("Worker pool shut down");
    }
}

/// Worker loop: expand shards until told to stop or the coordinator goes away.
fn run_worker(worker_id: usize, move_set: MoveSet, channels: WorkerChannels) {
    let moves = move_set.moves();

    for message in channels.from_coordinator.iter() {
        let (shard, side, entries) = match message {
            CoordinatorMessage::Expand {
                shard,
                side,
                entries,
            } => (shard, side, entries),
            CoordinatorMessage::Stop => break,
        };

        debug!(
            "Worker {} expanding {} shard {} ({} entries)",
            worker_id,
            side,
            shard,
            entries.len()
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            expand_shard(&entries, side, moves, &channels.stop.should_stop)
        }));

        let reply = match outcome {
            Ok(Ok(Expansion::Children(children))) => WorkerMessage::Expanded {
                worker_id,
                shard,
                children,
            },
            Ok(Ok(Expansion::Solved(path))) => WorkerMessage::Solved {
                worker_id,
                shard,
                path,
            },
            Ok(Ok(Expansion::Cancelled)) => {
                debug!("Worker {} abandoned shard {}", worker_id, shard);
                break;
            }
            Ok(Err(e)) => WorkerMessage::Failed {
                worker_id,
                shard,
                message: e.to_string(),
            },
            Err(payload) => WorkerMessage::Failed {
                worker_id,
                shard,
                message: panic_message(payload.as_ref()),
            },
        };

        if channels.to_coordinator.send(reply).is_err() {
            break;
        }
    }

    debug!("Worker {} stopped", worker_id);
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("worker panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("worker panicked: {}", s)
    } else {
        "worker panicked".to_string()
    }
}
