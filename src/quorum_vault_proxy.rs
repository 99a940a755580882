use multiversx_sc::proxy_imports::*;

use crate::types::ProposalSnapshot;

pub struct QuorumVaultProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for QuorumVaultProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = QuorumVaultProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        QuorumVaultProxyMethods { wrapped_tx: tx }
    }
}

pub struct QuorumVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> QuorumVaultProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<usize>,
        Arg1: ProxyArg<MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        threshold: Arg0,
        owners: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&threshold)
            .argument(&owners)
            .original_result()
    }
}

impl<Env, From, To, Gas> QuorumVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> QuorumVaultProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    /// Payable: attach the EGLD with `.egld(..)` on the returned call.
    pub fn deposit(self) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx.raw_call("deposit").original_result()
    }

    pub fn submit_proposal<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<BigUint<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        target: Arg0,
        value: Arg1,
        endpoint_name: Arg2,
        arguments: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("submitProposal")
            .argument(&target)
            .argument(&value)
            .argument(&endpoint_name)
            .argument(&arguments)
            .original_result()
    }

    pub fn confirm_proposal<Arg0: ProxyArg<usize>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("confirmProposal")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn execute_proposal<Arg0: ProxyArg<usize>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeProposal")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn revoke_confirmation<Arg0: ProxyArg<usize>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("revokeConfirmation")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn get_proposal_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCount")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<usize>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalSnapshot<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn get_proposals<Arg0: ProxyArg<usize>, Arg1: ProxyArg<usize>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ProposalSnapshot<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposals")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_pending_proposals(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, MultiValue2<usize, ProposalSnapshot<Env::Api>>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingProposals")
            .original_result()
    }

    pub fn is_confirmed<Arg0: ProxyArg<usize>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        proposal_index: Arg0,
        owner: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isConfirmed")
            .argument(&proposal_index)
            .argument(&owner)
            .original_result()
    }

    pub fn get_confirmations<Arg0: ProxyArg<usize>>(
        self,
        proposal_index: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getConfirmations")
            .argument(&proposal_index)
            .original_result()
    }

    pub fn get_vault_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue4<usize, usize, usize, BigUint<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVaultConfig")
            .original_result()
    }

    pub fn is_owner<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOwner")
            .argument(&address)
            .original_result()
    }

    pub fn get_owners(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ManagedAddress<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwners")
            .original_result()
    }

    pub fn get_owner_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwnerCount")
            .original_result()
    }

    pub fn threshold(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getThreshold")
            .original_result()
    }
}
