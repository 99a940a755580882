multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Action Call: what an executed proposal invokes on its target
// ============================================================

/// Endpoint name plus raw arguments. An empty endpoint name with no
/// arguments is a plain EGLD transfer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ActionCall<M: ManagedTypeApi> {
    pub endpoint_name: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

impl<M: ManagedTypeApi> ActionCall<M> {
    pub fn is_empty(&self) -> bool {
        self.endpoint_name.is_empty() && self.arguments.is_empty()
    }
}

// ============================================================
// Proposal: stored record, one per submitted action
// ============================================================

/// Confirmations live in their own per-proposal set, not here.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub payload: ActionCall<M>,
    /// Set once, before the action runs. Never cleared.
    pub executed: bool,
}

// ============================================================
// Proposal Snapshot: read-only view returned by queries
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ProposalSnapshot<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub value: BigUint<M>,
    pub payload: ActionCall<M>,
    pub executed: bool,
    pub confirmation_count: usize,
}

impl<M: ManagedTypeApi> ProposalSnapshot<M> {
    pub fn new(proposal: Proposal<M>, confirmation_count: usize) -> Self {
        ProposalSnapshot {
            target: proposal.target,
            value: proposal.value,
            payload: proposal.payload,
            executed: proposal.executed,
            confirmation_count,
        }
    }
}
