#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::multiversx_sc::codec::{top_encode_to_vec_u8_or_panic, TopEncode};
use multiversx_sc_scenario::scenario_model::Log;

use quorum_vault::quorum_vault_proxy::QuorumVaultProxy;
use quorum_vault::types::ProposalSnapshot;

pub const CODE_PATH: MxscPath = MxscPath::new("output/quorum-vault.mxsc.json");

pub const VAULT: TestSCAddress = TestSCAddress::new("quorum-vault");
pub const DEPLOYER: TestAddress = TestAddress::new("deployer");
pub const OWNER_A: TestAddress = TestAddress::new("owner-a");
pub const OWNER_B: TestAddress = TestAddress::new("owner-b");
pub const OWNER_C: TestAddress = TestAddress::new("owner-c");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const RECIPIENT: TestAddress = TestAddress::new("recipient");

pub const ACCOUNT_BALANCE: u64 = 10_000;

/// Status code the VM assigns to `require!` / `sc_panic!` failures.
pub const USER_ERROR: u64 = 4;

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CODE_PATH, quorum_vault::ContractBuilder);
    blockchain
}

pub fn managed(address: Address) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address)
}

pub fn egld(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

pub fn owner_list(owners: &[Address]) -> MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>> {
    let mut result = MultiValueEncoded::new();
    for owner in owners {
        result.push(managed(owner.clone()));
    }
    result
}

pub fn default_owners() -> Vec<Address> {
    vec![OWNER_A.to_address(), OWNER_B.to_address(), OWNER_C.to_address()]
}

fn funded_world() -> ScenarioWorld {
    let mut world = world();
    for account in [DEPLOYER, OWNER_A, OWNER_B, OWNER_C, OUTSIDER, RECIPIENT] {
        world.account(account).nonce(1).balance(ACCOUNT_BALANCE);
    }
    world
}

/// Deploys with `owners` and expects the deployment to be rejected.
pub fn deploy_expect_err(threshold: usize, owners: MultiValueEncoded<StaticApi, ManagedAddress<StaticApi>>, message: &str) {
    let mut world = funded_world();
    world
        .tx()
        .from(DEPLOYER)
        .typed(QuorumVaultProxy)
        .init(threshold, owners)
        .code(CODE_PATH)
        .new_address(VAULT)
        .returns(ExpectError(USER_ERROR, message))
        .run();
}

pub struct VaultSetup {
    pub world: ScenarioWorld,
}

impl VaultSetup {
    /// Three owners (A, B, C), two confirmations required.
    pub fn new() -> Self {
        Self::with_owners(2, &default_owners())
    }

    pub fn with_owners(threshold: usize, owners: &[Address]) -> Self {
        let mut world = funded_world();
        world
            .tx()
            .from(DEPLOYER)
            .typed(QuorumVaultProxy)
            .init(threshold, owner_list(owners))
            .code(CODE_PATH)
            .new_address(VAULT)
            .run();

        VaultSetup { world }
    }

    // ── Endpoints ──

    pub fn deposit(&mut self, from: TestAddress, amount: u64) -> Vec<Log> {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .deposit()
            .egld(egld(amount))
            .returns(ReturnsLogs)
            .run()
    }

    pub fn deposit_expect_err(&mut self, from: TestAddress, amount: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .deposit()
            .egld(egld(amount))
            .returns(ExpectError(USER_ERROR, message))
            .run();
    }

    /// Plain transfer proposal: no endpoint, no arguments.
    pub fn submit_transfer(&mut self, from: TestAddress, target: Address, value: u64) -> usize {
        self.submit_call(from, target, value, "", &[])
    }

    pub fn submit_call(
        &mut self,
        from: TestAddress,
        target: Address,
        value: u64,
        endpoint_name: &str,
        arguments: &[&[u8]],
    ) -> usize {
        let (proposal_index, _) =
            self.submit_call_logged(from, target, value, endpoint_name, arguments);
        proposal_index
    }

    /// Same as `submit_call`, also handing back the emitted logs.
    pub fn submit_call_logged(
        &mut self,
        from: TestAddress,
        target: Address,
        value: u64,
        endpoint_name: &str,
        arguments: &[&[u8]],
    ) -> (usize, Vec<Log>) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .submit_proposal(
                managed(target),
                egld(value),
                ManagedBuffer::<StaticApi>::from(endpoint_name),
                argument_list(arguments),
            )
            .returns(ReturnsResult)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn submit_expect_err(&mut self, from: TestAddress, target: Address, value: u64, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .submit_proposal(
                managed(target),
                egld(value),
                ManagedBuffer::<StaticApi>::new(),
                argument_list(&[]),
            )
            .returns(ExpectError(USER_ERROR, message))
            .run();
    }

    pub fn confirm(&mut self, from: TestAddress, proposal_index: usize) -> Vec<Log> {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .confirm_proposal(proposal_index)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn confirm_expect_err(&mut self, from: TestAddress, proposal_index: usize, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .confirm_proposal(proposal_index)
            .returns(ExpectError(USER_ERROR, message))
            .run();
    }

    /// Status, message and logs of a confirmation the contract is expected
    /// to refuse.
    pub fn confirm_rejected(
        &mut self,
        from: TestAddress,
        proposal_index: usize,
    ) -> (u64, String, Vec<Log>) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .confirm_proposal(proposal_index)
            .returns(ReturnsStatus)
            .returns(ReturnsMessage)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn execute(&mut self, from: TestAddress, proposal_index: usize) -> Vec<Log> {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .execute_proposal(proposal_index)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn execute_expect_err(&mut self, from: TestAddress, proposal_index: usize, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .execute_proposal(proposal_index)
            .returns(ExpectError(USER_ERROR, message))
            .run();
    }

    pub fn revoke(&mut self, from: TestAddress, proposal_index: usize) -> Vec<Log> {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .revoke_confirmation(proposal_index)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn revoke_expect_err(&mut self, from: TestAddress, proposal_index: usize, message: &str) {
        self.world
            .tx()
            .from(from)
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .revoke_confirmation(proposal_index)
            .returns(ExpectError(USER_ERROR, message))
            .run();
    }

    // ── Views ──

    pub fn proposal(&mut self, proposal_index: usize) -> ProposalSnapshot<StaticApi> {
        self.world
            .query()
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .get_proposal(proposal_index)
            .returns(ReturnsResult)
            .run()
    }

    pub fn confirmation_count(&mut self, proposal_index: usize) -> usize {
        self.proposal(proposal_index).confirmation_count
    }

    pub fn is_executed(&mut self, proposal_index: usize) -> bool {
        self.proposal(proposal_index).executed
    }

    pub fn is_confirmed(&mut self, proposal_index: usize, owner: TestAddress) -> bool {
        self.world
            .query()
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .is_confirmed(proposal_index, managed(owner.to_address()))
            .returns(ReturnsResult)
            .run()
    }

    pub fn proposal_count(&mut self) -> usize {
        self.world
            .query()
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .get_proposal_count()
            .returns(ReturnsResult)
            .run()
    }

    pub fn confirmations(&mut self, proposal_index: usize) -> Vec<Address> {
        let confirmations = self
            .world
            .query()
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .get_confirmations(proposal_index)
            .returns(ReturnsResult)
            .run();
        confirmations.into_iter().map(|owner| owner.to_address()).collect()
    }

    pub fn vault_balance(&mut self) -> BigUint<StaticApi> {
        let (_, _, _, balance) = self
            .world
            .query()
            .to(VAULT)
            .typed(QuorumVaultProxy)
            .get_vault_config()
            .returns(ReturnsResult)
            .run()
            .into_tuple();
        balance
    }
}

pub fn argument_list(arguments: &[&[u8]]) -> MultiValueEncoded<StaticApi, ManagedBuffer<StaticApi>> {
    let mut result = MultiValueEncoded::new();
    for argument in arguments {
        result.push(ManagedBuffer::from(*argument));
    }
    result
}

// ── Events ──

pub fn encoded<T: TopEncode>(value: &T) -> Vec<u8> {
    top_encode_to_vec_u8_or_panic(value)
}

/// Logs whose first topic is the event identifier `name`.
pub fn events_named<'a>(logs: &'a [Log], name: &str) -> Vec<&'a Log> {
    logs.iter()
        .filter(|log| log.topics.first().map(Vec::as_slice) == Some(name.as_bytes()))
        .collect()
}

/// The one and only `name` event in `logs`.
pub fn single_event<'a>(logs: &'a [Log], name: &str) -> &'a Log {
    let matching = events_named(logs, name);
    assert_eq!(matching.len(), 1, "expected exactly one `{name}` event");
    matching[0]
}

/// Asserts the `(caller, index)` topics shared by the lifecycle events.
pub fn assert_lifecycle_event(logs: &[Log], name: &str, caller: TestAddress, proposal_index: usize) -> Log {
    let event = single_event(logs, name);
    assert_eq!(event.address, VAULT.to_address());
    assert_eq!(event.topics[1], encoded(&managed(caller.to_address())));
    assert_eq!(event.topics[2], encoded(&proposal_index));
    event.clone()
}
