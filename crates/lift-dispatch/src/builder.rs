//! Builder for constructing a [`DispatchEngine`].

use log::info;

use lift_core::{Request, RequestId, SimConfig};

use crate::{DispatchEngine, DispatchError, DispatchPolicy, DispatchResult, NearestStop};

/// Builder for [`DispatchEngine<P>`].
///
/// # Required inputs
///
/// - floor count (at least 1)
/// - the full request list, known up front
///
/// # Optional inputs
///
/// | Method        | Default         |
/// |---------------|-----------------|
/// | `.policy(p)`  | [`NearestStop`] |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = DispatchBuilder::new(10, requests)
///     .policy(SweepPolicy)
///     .build()?;
/// engine.run(200);
/// ```
pub struct DispatchBuilder<P: DispatchPolicy = NearestStop> {
    floors:   u32,
    requests: Vec<Request>,
    policy:   P,
}

impl DispatchBuilder<NearestStop> {
    pub fn new(floors: u32, requests: Vec<Request>) -> Self {
        Self { floors, requests, policy: NearestStop }
    }

    /// Take the floor count from `config`.  The policy is left at the default;
    /// drivers pick the concrete policy type from `config.policy`.
    pub fn from_config(config: &SimConfig, requests: Vec<Request>) -> Self {
        Self::new(config.floors, requests)
    }
}

impl<P: DispatchPolicy> DispatchBuilder<P> {
    /// Replace the direction policy.
    pub fn policy<Q: DispatchPolicy>(self, policy: Q) -> DispatchBuilder<Q> {
        DispatchBuilder {
            floors:   self.floors,
            requests: self.requests,
            policy,
        }
    }

    /// Validate the building and every request, and return an engine at rest
    /// on the ground floor at tick 0.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::NoFloors`] for a zero-floor building.
    /// - [`DispatchError::FloorOutOfRange`] / [`DispatchError::SameFloor`] for
    ///   the first malformed request.
    /// - [`DispatchError::Config`] for a request that has already boarded, or
    ///   more requests than `RequestId` can address.
    pub fn build(self) -> DispatchResult<DispatchEngine<P>> {
        if self.floors == 0 {
            return Err(DispatchError::NoFloors);
        }
        if RequestId::try_from(self.requests.len()).is_err() {
            return Err(DispatchError::Config(format!(
                "{} requests exceed the addressable maximum",
                self.requests.len()
            )));
        }

        for (i, request) in self.requests.iter().enumerate() {
            let id = RequestId(i as u32);
            for floor in [request.origin(), request.destination()] {
                if !floor.within(self.floors) {
                    return Err(DispatchError::FloorOutOfRange { request: id, floor, floors: self.floors });
                }
            }
            if request.origin() == request.destination() {
                return Err(DispatchError::SameFloor { request: id, floor: request.origin() });
            }
            if request.is_boarded() {
                return Err(DispatchError::Config(format!("{id} has already boarded")));
            }
        }

        info!("dispatch engine ready: {} floors, {} requests", self.floors, self.requests.len());
        Ok(DispatchEngine::from_parts(self.floors, self.requests, self.policy))
    }
}
