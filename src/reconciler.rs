//! Local truth about the AGV and the rules that replace it.
//!
//! Every inbound state message replaces the local copy as a whole, except
//! that `operatingMode == STOPPED` resets it to the factory-initial value.
//! The one sanctioned local mutation is the optimistic `driving = false` on
//! PAUSE, which opens a divergence window tracked by [`StateOrigin`] until
//! the next reconciled state message closes it.

use crate::config::VehicleConfig;
use crate::protocol::vda5050_common::{BatteryState, HeaderId, Position};
use crate::protocol::vda_2_0_0::vda5050_2_0_0_ack::AckRequest;
use crate::protocol::vda_2_0_0::vda5050_2_0_0_state::{OperatingMode, State};
use crate::utils;

/// Where the current local state came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOrigin {
    FactoryInitial,
    /// Copied verbatim from the state message with this header id.
    Reported { header_id: HeaderId },
    /// Reset to factory-initial by a STOPPED state message.
    RemoteReset { header_id: HeaderId },
    /// `driving` cleared locally by a PAUSE that the AGV has not yet reported.
    OptimisticPause { last_header_id: Option<HeaderId> },
}

impl StateOrigin {
    fn header_id(&self) -> Option<HeaderId> {
        match *self {
            StateOrigin::FactoryInitial => None,
            StateOrigin::Reported { header_id } | StateOrigin::RemoteReset { header_id } => {
                Some(header_id)
            }
            StateOrigin::OptimisticPause { last_header_id } => last_header_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalState {
    state: State,
    origin: StateOrigin,
}

impl LocalState {
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn origin(&self) -> StateOrigin {
        self.origin
    }

    /// True while an optimistic mutation has not been confirmed or overwritten.
    pub fn is_diverged(&self) -> bool {
        matches!(self.origin, StateOrigin::OptimisticPause { .. })
    }

    pub(crate) fn pause_optimistically(&mut self) {
        self.state.driving = false;
        self.origin = StateOrigin::OptimisticPause {
            last_header_id: self.origin.header_id(),
        };
    }
}

/// Result of applying one state message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub state: LocalState,
    /// Acknowledgement to publish for the applied message.
    pub ack: AckRequest,
    /// The message carried STOPPED and local state was reset.
    pub reset: bool,
    /// An optimistic pause was pending and is now overwritten.
    pub superseded_optimistic: bool,
}

pub struct StateReconciler {
    factory_initial: State,
}

impl StateReconciler {
    pub fn new(vehicle: &VehicleConfig) -> Self {
        Self {
            factory_initial: create_factory_initial_state(vehicle),
        }
    }

    pub fn factory_initial(&self) -> &State {
        &self.factory_initial
    }

    pub fn initial_local_state(&self) -> LocalState {
        LocalState {
            state: self.factory_initial.clone(),
            origin: StateOrigin::FactoryInitial,
        }
    }

    /// Computes the new local state and its acknowledgement. Pure: the
    /// caller commits the state and publishes the ack.
    pub fn apply(&self, current: &LocalState, incoming: State, now: String) -> Reconciled {
        let header_id = incoming.header.header_id;
        let reset = incoming.operating_mode == OperatingMode::Stopped;

        let state = if reset {
            LocalState {
                state: self.factory_initial.clone(),
                origin: StateOrigin::RemoteReset { header_id },
            }
        } else {
            LocalState {
                state: incoming,
                origin: StateOrigin::Reported { header_id },
            }
        };

        Reconciled {
            state,
            ack: AckRequest {
                state_id: header_id,
                timestamp: now,
            },
            reset,
            superseded_optimistic: current.is_diverged(),
        }
    }
}

fn create_factory_initial_state(vehicle: &VehicleConfig) -> State {
    State {
        header: utils::create_header(vehicle, 1),
        order_id: String::new(),
        order_update_id: 0,
        last_node_id: String::new(),
        last_node_sequence_id: 0,
        driving: false,
        position: Position {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        },
        battery_state: BatteryState {
            battery_charge: 100.0,
            charging: false,
        },
        operating_mode: OperatingMode::Automatic,
        action_states: vec![],
        paused: None,
    }
}
