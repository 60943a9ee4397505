use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use log::{debug, warn};

use crate::pairs::SequencePair;
use crate::{Aligner, AlignerError, AlignerParameters, AlignmentResult, Result};

struct WorkItem {
    index: usize,
    pair: SequencePair,
}

struct WorkResult {
    index: usize,
    row: usize,
    result: Result<AlignmentResult>,
}

/// Pool of worker threads aligning independent pairs.
///
/// Every pair gets its own score matrix inside the worker that picks it up;
/// workers only share the channels and a copy of the parameters.
pub struct BatchAligner {
    work_tx: Option<Sender<WorkItem>>,
    result_rx: Receiver<WorkResult>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl BatchAligner {
    pub fn new(workers: usize, params: AlignerParameters) -> Result<Self> {
        let aligner = Aligner::new(params);
        Self::with_task(workers, move |pair: &SequencePair| aligner.align(&pair.seq1, &pair.seq2))
    }

    /// Starts `workers` threads that each run `task` on the pairs they receive.
    fn with_task<F>(workers: usize, task: F) -> Result<Self>
    where
        F: Fn(&SequencePair) -> Result<AlignmentResult> + Send + Sync + 'static,
    {
        if workers == 0 {
            return Err(AlignerError::InvalidConfig(
                "batch aligner needs at least one worker".to_string(),
            ));
        }

        let task = Arc::new(task);
        let (work_tx, work_rx) = bounded::<WorkItem>(workers * 2);
        let (result_tx, result_rx) = unbounded();

        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let task = Arc::clone(&task);
            let handle = thread::Builder::new()
                .name(format!("nw-align-{}", id))
                .spawn(move || Self::worker(task.as_ref(), work_rx, result_tx))?;
            handles.push(handle);
        }
        debug!("started {} alignment workers", workers);

        Ok(Self {
            work_tx: Some(work_tx),
            result_rx,
            workers: handles,
        })
    }

    fn worker<F>(task: &F, work_rx: Receiver<WorkItem>, result_tx: Sender<WorkResult>)
    where
        F: Fn(&SequencePair) -> Result<AlignmentResult>,
    {
        while let Ok(work) = work_rx.recv() {
            // A panic must still produce a result, or align_all waits forever
            let result = panic::catch_unwind(AssertUnwindSafe(|| task(&work.pair)))
                .unwrap_or_else(|payload| {
                    Err(AlignerError::Worker(format!(
                        "row {} panicked: {}",
                        work.pair.row,
                        panic_message(payload.as_ref())
                    )))
                });
            let sent = result_tx.send(WorkResult {
                index: work.index,
                row: work.pair.row,
                result,
            });
            if sent.is_err() {
                break;
            }
        }
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Aligns every pair and returns the results in input order. The first
    /// failing pair (by input position) decides the error.
    pub fn align_all(&self, pairs: Vec<SequencePair>) -> Result<Vec<AlignmentResult>> {
        let total = pairs.len();
        let work_tx = self
            .work_tx
            .as_ref()
            .ok_or_else(|| AlignerError::Worker("work channel closed".to_string()))?;

        let mut slots: Vec<Option<Result<AlignmentResult>>> = (0..total).map(|_| None).collect();
        let mut pending = pairs.into_iter().enumerate();
        let mut in_flight = 0;
        let mut received = 0;

        while received < total {
            // Keep the bounded queue topped up without blocking on a full one
            while in_flight < self.workers.len() * 2 {
                match pending.next() {
                    Some((index, pair)) => {
                        work_tx
                            .send(WorkItem { index, pair })
                            .map_err(|e| AlignerError::Worker(e.to_string()))?;
                        in_flight += 1;
                    }
                    None => break,
                }
            }

            let done = self
                .result_rx
                .recv()
                .map_err(|e| AlignerError::Worker(e.to_string()))?;
            if let Err(e) = &done.result {
                warn!("alignment of row {} failed: {}", done.row, e);
            }
            slots[done.index] = Some(done.result);
            in_flight -= 1;
            received += 1;
        }

        slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Err(AlignerError::Worker("missing result".to_string()))))
            .collect()
    }
}

impl Drop for BatchAligner {
    fn drop(&mut self) {
        // Closing the work channel ends each worker's recv loop
        self.work_tx.take();

        while let Some(worker) = self.workers.pop() {
            let name = worker.thread().name().unwrap_or("worker").to_string();
            if let Err(payload) = worker.join() {
                warn!("{} exited with a panic: {}", name, panic_message(payload.as_ref()));
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
