use log::info;
use thiserror::Error;

use noip_updater::{
    ipv4source::{Ipv4Source, SourceError},
    provider::{Provider, ProviderError, UpdateOutcome},
};

/// An executor performs the complete set of steps for one update run:
/// resolve the current IPv4 address, then push it to the provider once.
/// There is no retry; a failed run is retried by the next scheduled invocation.
pub struct Executor<'a> {
    source: &'a dyn Ipv4Source,
    provider: &'a dyn Provider,
    hostname: &'a str,
}

#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("{0}")]
    Source(#[from] SourceError),
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl<'a> Executor<'a> {
    pub fn new(source: &'a dyn Ipv4Source, provider: &'a dyn Provider, hostname: &'a str) -> Self {
        Self {
            source,
            provider,
            hostname,
        }
    }

    pub fn run(&self) -> Result<UpdateOutcome, ExecutorError> {
        let target_addr = self.source.addr()?;
        info!("Target IPv4 address: {}", target_addr);

        let outcome = self.provider.update(self.hostname, target_addr)?;
        match outcome {
            UpdateOutcome::Updated => info!("Provider updated {}", self.hostname),
            UpdateOutcome::Unchanged => info!("{} was already up to date", self.hostname),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use http::StatusCode;
    use noip_updater::ipv4source::FixedSource;

    use super::*;

    mockall::mock! {
        UpdateProvider {}
        impl Provider for UpdateProvider {
            fn update(&self, hostname: &str, ip: Ipv4Addr) -> Result<UpdateOutcome, ProviderError>;
        }
    }

    struct FailingSource;
    impl Ipv4Source for FailingSource {
        fn addr(&self) -> Result<Ipv4Addr, SourceError> {
            Err(SourceError::InterfaceNotFound("eth0".to_string()))
        }
    }

    #[test]
    fn pushes_the_resolved_address_exactly_once() {
        let source = FixedSource::create(Ipv4Addr::new(203, 0, 113, 5));
        let mut provider = MockUpdateProvider::new();
        provider
            .expect_update()
            .withf(|hostname, ip| {
                hostname == "h.example.com" && *ip == Ipv4Addr::new(203, 0, 113, 5)
            })
            .times(1)
            .returning(|_, _| Ok(UpdateOutcome::Updated));

        let result = Executor::new(source.as_ref(), &provider, "h.example.com").run();
        assert_eq!(result.unwrap(), UpdateOutcome::Updated);
    }

    #[test]
    fn provider_rejection_propagates_without_retry() {
        let source = FixedSource::create(Ipv4Addr::new(203, 0, 113, 5));
        let mut provider = MockUpdateProvider::new();
        provider.expect_update().times(1).returning(|_, _| {
            Err(ProviderError::Rejected {
                status: StatusCode::UNAUTHORIZED,
                body: "badauth".to_string(),
            })
        });

        let result = Executor::new(source.as_ref(), &provider, "h.example.com").run();
        assert!(matches!(
            result,
            Err(ExecutorError::Provider(ProviderError::Rejected { .. }))
        ));
    }

    #[test]
    fn source_failure_prevents_any_provider_call() {
        let mut provider = MockUpdateProvider::new();
        provider.expect_update().never();

        let result = Executor::new(&FailingSource, &provider, "h.example.com").run();
        assert!(matches!(
            result,
            Err(ExecutorError::Source(SourceError::InterfaceNotFound(_)))
        ));
    }
}
