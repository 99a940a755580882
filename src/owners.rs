multiversx_sc::imports!();

use crate::errors::{
    ERR_DUPLICATE_OWNER, ERR_INVALID_THRESHOLD, ERR_NO_OWNERS, ERR_UNAUTHORIZED, ERR_ZERO_OWNER,
};

/// Fixed owner set and confirmation threshold.
///
/// Written once from `init` and never touched again. The owner set mapper
/// keeps insertion order and answers membership in O(1), so the ordered list
/// and the lookup cache cannot drift apart.
#[multiversx_sc::module]
pub trait OwnerRegistryModule {
    fn init_owners(&self, threshold: usize, owners: MultiValueEncoded<ManagedAddress>) {
        require!(!owners.is_empty(), ERR_NO_OWNERS);

        let mut mapper = self.owners();
        for owner in owners {
            require!(!owner.is_zero(), ERR_ZERO_OWNER);
            require!(mapper.insert(owner), ERR_DUPLICATE_OWNER);
        }

        require!(
            threshold >= 1 && threshold <= mapper.len(),
            ERR_INVALID_THRESHOLD
        );
        self.threshold().set(threshold);
    }

    fn require_owner(&self, caller: &ManagedAddress) {
        require!(self.owners().contains(caller), ERR_UNAUTHORIZED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isOwner)]
    fn is_owner(&self, address: &ManagedAddress) -> bool {
        self.owners().contains(address)
    }

    #[view(getOwners)]
    fn get_owners(&self) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for owner in self.owners().iter() {
            result.push(owner);
        }
        result
    }

    #[view(getOwnerCount)]
    fn get_owner_count(&self) -> usize {
        self.owners().len()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owners")]
    fn owners(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getThreshold)]
    #[storage_mapper("threshold")]
    fn threshold(&self) -> SingleValueMapper<usize>;
}
