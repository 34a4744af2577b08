//! Deploy Use Case
//!
//! Orchestrates a deployment run:
//! 1. Plan the graph (topological order, cycle/reference checks)
//! 2. Take the exclusive ledger lock and load the ledger
//! 3. For each resource in plan order: skip recorded successes, resolve
//!    argument bindings, record Pending, invoke the deployer, finalize
//!    the record, persisting the ledger at every transition
//! 4. Halt on the first failure; later resources are not attempted
//!
//! This use case is pure orchestration - ordering and resolution live in
//! domain services, persistence and transport behind ports. Planning
//! errors surface before any side effect; an execution failure is carried
//! inside the returned `DeployResult` so callers can render the partial
//! run before mapping it to an exit status.

use std::sync::Arc;

use crate::domain::entities::{DeploymentRecord, ResourceGraph};
use crate::domain::ports::{
    DeployEvent, DeployEventSink, LedgerRepository, NoopEventSink, ResourceDeployer,
};
use crate::domain::services::{resolve_args, Planner};
use crate::domain::value_objects::ArgsFingerprint;
use crate::error::CaravanResult;

use super::options::DeployOptions;
use super::result::{DeployResult, DeployedResource, FailedResource};

/// Deploy use case - orchestrates one run
///
/// Parameterized by its ports, allowing for easy testing and different
/// transports.
pub struct DeployUseCase<R, D>
where
    R: LedgerRepository,
    D: ResourceDeployer,
{
    ledger_repo: R,
    deployer: D,
}

impl<R, D> DeployUseCase<R, D>
where
    R: LedgerRepository,
    D: ResourceDeployer,
{
    pub fn new(ledger_repo: R, deployer: D) -> Self {
        Self {
            ledger_repo,
            deployer,
        }
    }

    /// Execute a run without event reporting
    pub fn execute(
        &self,
        graph: &ResourceGraph,
        options: &DeployOptions,
    ) -> CaravanResult<DeployResult> {
        self.execute_with_events(graph, options, Arc::new(NoopEventSink))
    }

    /// Execute a run, emitting progress events to the sink
    ///
    /// Dry runs report the skip/deploy partition in the result but emit
    /// no per-resource events and never touch the ledger or deployer.
    pub fn execute_with_events(
        &self,
        graph: &ResourceGraph,
        options: &DeployOptions,
        event_sink: Arc<dyn DeployEventSink>,
    ) -> CaravanResult<DeployResult> {
        let plan = Planner::plan(graph)?;

        let _guard = self.ledger_repo.lock(&options.ledger_path)?;
        let mut ledger = self.ledger_repo.load(&options.ledger_path)?;

        let mut result = DeployResult::new();
        result.planned = plan.len();
        result.dry_run = options.dry_run;

        let pending_count = plan
            .iter()
            .filter(|spec| !ledger.is_deployed(spec.name()))
            .count();
        event_sink.on_event(DeployEvent::Started {
            manifest: options.manifest_path.clone(),
            ledger: options.ledger_path.clone(),
            resource_count: plan.len(),
            pending_count,
        });

        for (index, spec) in plan.iter().enumerate() {
            if options.cancel_requested() {
                result.interrupted = true;
                event_sink.on_event(DeployEvent::Interrupted {
                    completed: result.deployed.len(),
                });
                break;
            }

            let name = spec.name().clone();

            if let Some(record) = ledger.get(&name) {
                if record.is_success() {
                    result.skipped.push(name.to_string());
                    if event_sink.wants_detailed_events() {
                        event_sink.on_event(DeployEvent::ResourceSkipped {
                            index,
                            name: name.to_string(),
                            identifier: record.identifier().map(str::to_string),
                        });
                    }
                    continue;
                }
            }

            if options.dry_run {
                result.deployed.push(DeployedResource {
                    name: name.to_string(),
                    identifier: None,
                });
                continue;
            }

            if event_sink.wants_detailed_events() {
                event_sink.on_event(DeployEvent::ResourceStarted {
                    index,
                    name: name.to_string(),
                });
            }

            // References resolve against successes recorded earlier in
            // this loop or in prior runs; plan order guarantees both.
            let args = resolve_args(spec, &ledger)?;

            // Pending reaches the store before the deploy call so a crash
            // mid-deploy is visible to `status`.
            ledger.record(DeploymentRecord::pending(name.clone()));
            self.ledger_repo.save(&ledger, &options.ledger_path)?;

            match self.deployer.deploy(&name, &args) {
                Ok(identifier) => {
                    let fingerprint = ArgsFingerprint::from_args(&args);
                    ledger.record(DeploymentRecord::success(
                        name.clone(),
                        identifier.clone(),
                        fingerprint,
                    ));
                    self.ledger_repo.save(&ledger, &options.ledger_path)?;

                    result.deployed.push(DeployedResource {
                        name: name.to_string(),
                        identifier: Some(identifier.clone()),
                    });
                    if event_sink.wants_detailed_events() {
                        event_sink.on_event(DeployEvent::ResourceDeployed {
                            index,
                            name: name.to_string(),
                            identifier,
                        });
                    }
                }
                Err(err) => {
                    let cause = err.to_string();
                    ledger.record(DeploymentRecord::failed(name.clone(), cause.clone()));
                    self.ledger_repo.save(&ledger, &options.ledger_path)?;

                    event_sink.on_event(DeployEvent::ResourceFailed {
                        index,
                        name: name.to_string(),
                        error: cause.clone(),
                    });
                    result.failed = Some(FailedResource {
                        name: name.to_string(),
                        error: cause,
                    });
                    break;
                }
            }
        }

        event_sink.on_event(DeployEvent::Completed {
            deployed_count: result.deployed.len(),
            skipped_count: result.skipped.len(),
            failed_count: usize::from(result.failed.is_some()),
        });

        Ok(result)
    }
}
