multiversx_sc::imports!();

use crate::types::ActionCall;

/// Observer notifications. Emitted only after the state change they
/// describe has been applied.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] amount: &BigUint,
        new_balance: &BigUint,
    );

    #[event("proposalSubmitted")]
    fn proposal_submitted_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] proposal_index: usize,
        #[indexed] target: &ManagedAddress,
        #[indexed] value: &BigUint,
        payload: &ActionCall<Self::Api>,
    );

    #[event("proposalConfirmed")]
    fn proposal_confirmed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] proposal_index: usize,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] proposal_index: usize,
    );

    #[event("confirmationRevoked")]
    fn confirmation_revoked_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] proposal_index: usize,
    );

    /// The proposal stays executed; this is the only trace of the failure.
    #[event("actionFailed")]
    fn action_failed_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] proposal_index: usize,
        #[indexed] err_code: u32,
        err_msg: &ManagedBuffer,
    );
}
