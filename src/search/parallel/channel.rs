//! Message channels between the coordinator and the expansion workers.

use crate::cube::Move;
use crate::search::frontier::{FrontierEntry, Side};
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Message sent from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerMessage {
    /// Shard fully expanded.
    Expanded {
        worker_id: usize,
        shard: usize,
        children: Vec<FrontierEntry>,
    },
    /// A forward child was already solved.
    Solved {
        worker_id: usize,
        shard: usize,
        path: Vec<Move>,
    },
    /// Expansion failed or panicked.
    Failed {
        worker_id: usize,
        shard: usize,
        message: String,
    },
}

/// Message sent from coordinator to workers.
#[derive(Debug, Clone)]
pub enum CoordinatorMessage {
    /// Expand the given entries on one side. The worker owns the shard.
    Expand {
        shard: usize,
        side: Side,
        entries: Vec<FrontierEntry>,
    },
    /// Signal the worker to exit.
    Stop,
}

/// Flag raised once the pool is shutting down.
#[derive(Debug, Default)]
pub struct StopSignal {
    /// Checked by workers between parents of a shard.
    pub should_stop: AtomicBool,
}

impl StopSignal {
    /// Check if workers should abandon their current shard.
    pub fn should_stop(&self) -> bool {
        self.should_stop.load(Ordering::SeqCst)
    }

    /// Signal all workers to stop.
    pub fn signal_stop(&self) {
        self.should_stop.store(true, Ordering::SeqCst);
    }
}

/// Channel endpoints for a worker.
pub struct WorkerChannels {
    /// Send messages to coordinator.
    pub to_coordinator: Sender<WorkerMessage>,
    /// Receive messages from coordinator.
    pub from_coordinator: Receiver<CoordinatorMessage>,
    /// Stop flag shared with the coordinator.
    pub stop: Arc<StopSignal>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Receive messages from workers.
    pub from_workers: Receiver<WorkerMessage>,
    /// Send messages to workers (one sender per worker).
    pub to_workers: Vec<Sender<CoordinatorMessage>>,
    /// Stop flag shared with every worker.
    pub stop: Arc<StopSignal>,
}

/// Create channels for a pool with the given number of workers.
pub fn create_channels(num_workers: usize) -> (CoordinatorChannels, Vec<WorkerChannels>) {
    let stop = Arc::new(StopSignal::default());

    // Unbounded channel from workers to coordinator (workers never block on results)
    let (worker_tx, coordinator_rx) = unbounded();

    let mut to_workers = Vec::with_capacity(num_workers);
    let mut worker_channels = Vec::with_capacity(num_workers);

    for _ in 0..num_workers {
        // Shard assignments, then the final stop request
        let (coord_tx, worker_rx) = bounded(8);
        to_workers.push(coord_tx);
        worker_channels.push(WorkerChannels {
            to_coordinator: worker_tx.clone(),
            from_coordinator: worker_rx,
            stop: Arc::clone(&stop),
        });
    }

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        to_workers,
        stop,
    };

    (coordinator, worker_channels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;

    #[test]
    fn test_create_channels() {
        let (coordinator, workers) = create_channels(4);

        assert_eq!(workers.len(), 4);
        assert_eq!(coordinator.to_workers.len(), 4);

        let msg = WorkerMessage::Expanded {
            worker_id: 2,
            shard: 2,
            children: Vec::new(),
        };
        workers[2].to_coordinator.send(msg).unwrap();

        match coordinator.from_workers.recv().unwrap() {
            WorkerMessage::Expanded {
                worker_id,
                shard,
                children,
            } => {
                assert_eq!(worker_id, 2);
                assert_eq!(shard, 2);
                assert!(children.is_empty());
            }
            _ => panic!("Unexpected message type"),
        }
    }

    #[test]
    fn test_coordinator_dispatch() {
        let (coordinator, workers) = create_channels(2);
        let root = FrontierEntry::root(Cube::solved().state());

        for (shard, tx) in coordinator.to_workers.iter().enumerate() {
            tx.send(CoordinatorMessage::Expand {
                shard,
                side: Side::Backward,
                entries: vec![root.clone(); shard + 1],
            })
            .unwrap();
        }

        for (i, worker) in workers.iter().enumerate() {
            match worker.from_coordinator.recv().unwrap() {
                CoordinatorMessage::Expand {
                    shard,
                    side,
                    entries,
                } => {
                    assert_eq!(shard, i, "Worker {} received wrong shard", i);
                    assert_eq!(side, Side::Backward);
                    assert_eq!(entries.len(), i + 1);
                }
                _ => panic!("Worker {} received unexpected message", i),
            }
        }
    }

    #[test]
    fn test_shared_stop_signal() {
        let (coordinator, workers) = create_channels(2);

        assert!(!workers[1].stop.should_stop());
        coordinator.stop.signal_stop();
        assert!(workers.iter().all(|w| w.stop.should_stop()));
    }

    #[test]
    fn test_disconnect_after_drop() {
        let (coordinator, workers) = create_channels(1);
        drop(coordinator);
        assert!(workers[0].from_coordinator.recv().is_err());
    }
}
