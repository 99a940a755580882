#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod owners;
pub mod quorum_vault_proxy;
pub mod types;

use errors::{
    ERR_ALREADY_CONFIRMED, ERR_ALREADY_EXECUTED, ERR_INSUFFICIENT_APPROVALS,
    ERR_INSUFFICIENT_FUNDS, ERR_INVALID_AMOUNT, ERR_NOT_CONFIRMED, ERR_NOT_EXECUTED,
    ERR_NOT_FOUND,
};
use types::{ActionCall, Proposal, ProposalSnapshot};

// ============================================================
// Constants
// ============================================================

/// Error code reported in `actionFailed` when the vault cannot fund the
/// action. Same value the VM uses for user errors.
const USER_ERROR_CODE: u32 = 4;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait QuorumVault: owners::OwnerRegistryModule + events::EventsModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, threshold: usize, owners: MultiValueEncoded<ManagedAddress>) {
        self.init_owners(threshold, owners);
    }

    /// Owners and threshold are immutable, upgrades leave them alone.
    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: deposit
    // Anyone can fund the vault. The only way value comes in.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("EGLD")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.call_value().egld_value().clone_value();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let new_balance = self.vault_balance();
        self.deposit_event(&caller, &amount, &new_balance);
    }

    // ========================================================
    // ENDPOINT: submitProposal
    // Any owner can propose. Submitting does not confirm.
    // ========================================================

    #[endpoint(submitProposal)]
    fn submit_proposal(
        &self,
        target: ManagedAddress,
        value: BigUint,
        endpoint_name: ManagedBuffer,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> usize {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let mut argument_list = ManagedVec::new();
        for argument in arguments {
            argument_list.push(argument);
        }

        let proposal = Proposal {
            target,
            value,
            payload: ActionCall {
                endpoint_name,
                arguments: argument_list,
            },
            executed: false,
        };

        let proposal_index = self.proposals().len();
        self.proposals().push(&proposal);

        self.proposal_submitted_event(
            &caller,
            proposal_index,
            &proposal.target,
            &proposal.value,
            &proposal.payload,
        );

        proposal_index
    }

    // ========================================================
    // ENDPOINT: confirmProposal
    // One confirmation per owner per proposal.
    // ========================================================

    #[endpoint(confirmProposal)]
    fn confirm_proposal(&self, proposal_index: usize) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let proposal = self.require_proposal(proposal_index);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);

        let mut confirmations = self.confirmations(proposal_index);
        require!(!confirmations.contains(&caller), ERR_ALREADY_CONFIRMED);
        confirmations.insert(caller.clone());

        self.proposal_confirmed_event(&caller, proposal_index);
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // The executed flag is committed before the action leaves
    // the contract and is never rolled back, so neither a
    // reentrant call nor a retry can run the action twice.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_index: usize) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let mut proposal = self.require_proposal(proposal_index);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(
            self.confirmations(proposal_index).len() >= self.threshold().get(),
            ERR_INSUFFICIENT_APPROVALS
        );

        proposal.executed = true;
        self.proposals().set(proposal_index + 1, &proposal);

        self.invoke_action(caller, proposal_index, proposal);
    }

    // ========================================================
    // ENDPOINT: revokeConfirmation
    // Revocation is only accepted after execution, and only
    // from an owner holding a confirmation.
    // ========================================================

    #[endpoint(revokeConfirmation)]
    fn revoke_confirmation(&self, proposal_index: usize) {
        let caller = self.blockchain().get_caller();
        self.require_owner(&caller);

        let proposal = self.require_proposal(proposal_index);
        require!(proposal.executed, ERR_NOT_EXECUTED);

        let mut confirmations = self.confirmations(proposal_index);
        require!(confirmations.contains(&caller), ERR_NOT_CONFIRMED);
        confirmations.swap_remove(&caller);

        self.confirmation_revoked_event(&caller, proposal_index);
    }

    // ========================================================
    // INTERNAL: action dispatch
    // ========================================================

    fn invoke_action(
        &self,
        caller: ManagedAddress,
        proposal_index: usize,
        proposal: Proposal<Self::Api>,
    ) {
        if self.vault_balance() < proposal.value {
            self.action_failed_event(
                &caller,
                proposal_index,
                USER_ERROR_CODE,
                &ManagedBuffer::from(ERR_INSUFFICIENT_FUNDS),
            );
            return;
        }

        // Plain transfer to a wallet cannot fail once funded.
        if proposal.payload.is_empty() && !self.blockchain().is_smart_contract(&proposal.target)
        {
            self.send().direct_egld(&proposal.target, &proposal.value);
            self.proposal_executed_event(&caller, proposal_index);
            return;
        }

        // Contract targets run asynchronously: a failing callee reverts only
        // its own side, the executed flag above is already committed.
        self.tx()
            .to(&proposal.target)
            .egld(&proposal.value)
            .raw_call(proposal.payload.endpoint_name)
            .arguments_raw(proposal.payload.arguments.into())
            .callback(
                self.callbacks()
                    .execute_proposal_callback(caller, proposal_index),
            )
            .async_call_and_exit();
    }

    #[callback]
    fn execute_proposal_callback(
        &self,
        caller: ManagedAddress,
        proposal_index: usize,
        #[call_result] call_result: ManagedAsyncCallResult<MultiValueEncoded<ManagedBuffer>>,
    ) {
        match call_result {
            ManagedAsyncCallResult::Ok(_) => {
                self.proposal_executed_event(&caller, proposal_index);
            }
            ManagedAsyncCallResult::Err(err) => {
                self.action_failed_event(&caller, proposal_index, err.err_code, &err.err_msg);
            }
        }
    }

    // ========================================================
    // INTERNAL: helpers
    // ========================================================

    /// Proposal indices are 0-based, the vec mapper is 1-based.
    fn require_proposal(&self, proposal_index: usize) -> Proposal<Self::Api> {
        require!(proposal_index < self.proposals().len(), ERR_NOT_FOUND);
        self.proposals().get(proposal_index + 1)
    }

    fn snapshot(&self, proposal_index: usize) -> ProposalSnapshot<Self::Api> {
        let proposal = self.require_proposal(proposal_index);
        ProposalSnapshot::new(proposal, self.confirmations(proposal_index).len())
    }

    fn vault_balance(&self) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::egld(), 0)
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> usize {
        self.proposals().len()
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_index: usize) -> ProposalSnapshot<Self::Api> {
        self.snapshot(proposal_index)
    }

    #[view(getProposals)]
    fn get_proposals(
        &self,
        from: usize,
        count: usize,
    ) -> MultiValueEncoded<ProposalSnapshot<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposals().len();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);

        for proposal_index in from..end {
            result.push(self.snapshot(proposal_index));
        }
        result
    }

    #[view(getPendingProposals)]
    fn get_pending_proposals(
        &self,
    ) -> MultiValueEncoded<MultiValue2<usize, ProposalSnapshot<Self::Api>>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposals().len();

        for proposal_index in 0..total {
            let snapshot = self.snapshot(proposal_index);
            if !snapshot.executed {
                result.push((proposal_index, snapshot).into());
            }
        }
        result
    }

    #[view(isConfirmed)]
    fn is_confirmed(&self, proposal_index: usize, owner: &ManagedAddress) -> bool {
        self.require_proposal(proposal_index);
        self.confirmations(proposal_index).contains(owner)
    }

    #[view(getConfirmations)]
    fn get_confirmations(&self, proposal_index: usize) -> MultiValueEncoded<ManagedAddress> {
        self.require_proposal(proposal_index);
        let mut result = MultiValueEncoded::new();
        for owner in self.confirmations(proposal_index).iter() {
            result.push(owner);
        }
        result
    }

    #[view(getVaultConfig)]
    fn get_vault_config(&self) -> MultiValue4<usize, usize, usize, BigUint> {
        let owner_count = self.owners().len();
        let threshold = self.threshold().get();
        let proposal_count = self.proposals().len();
        let balance = self.vault_balance();
        (owner_count, threshold, proposal_count, balance).into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposals")]
    fn proposals(&self) -> VecMapper<Proposal<Self::Api>>;

    #[storage_mapper("confirmations")]
    fn confirmations(&self, proposal_index: usize) -> UnorderedSetMapper<ManagedAddress>;
}
