use std::{collections::BTreeMap, fmt, str::FromStr};

use primitive_types::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{TokenError, TokenResult};

pub type Amount = U256;

/// Opaque 20-byte account identifier. The all-zero value means "no account".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Last 20 bytes of a 32-byte digest.
    pub fn from_digest(digest: &[u8; 32]) -> Self {
        let mut out = [0u8; 20];
        out.copy_from_slice(&digest[12..]);
        Address(out)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddressParseError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("address must be 20 bytes, got {0}")]
    Length(usize),
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(s)?;
        if bytes.len() != 20 {
            return Err(AddressParseError::Length(bytes.len()));
        }
        let mut out = [0u8; 20];
        out.copy_from_slice(&bytes);
        Ok(Address(out))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LedgerEvent {
    Transfer {
        from: Address,
        to: Address,
        amount: Amount,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: Amount,
    },
    OwnershipTransferred {
        previous: Address,
        new: Address,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub total_supply: Amount,
    pub balances: BTreeMap<Address, Amount>,
    pub allowances: BTreeMap<Address, BTreeMap<Address, Amount>>,
    pub events: Vec<LedgerEvent>,
    pub state_root: [u8; 32],
}

/// Balance and allowance bookkeeping for a single fixed-supply token.
///
/// Zero balances and zero allowances are not stored, so two ledgers with the
/// same observable state always produce the same state root.
///
/// Deserialization goes through a checked wire form and rejects any state the
/// operations themselves could never produce.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "LedgerRepr")]
pub struct Ledger {
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<Address, BTreeMap<Address, Amount>>,
    events: Vec<LedgerEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerStateError {
    #[error("balances sum to {sum}, total supply is {total_supply}")]
    SupplyMismatch { sum: Amount, total_supply: Amount },
    #[error("balances overflow 256 bits")]
    BalanceOverflow,
    #[error("zero address holds a {0} entry")]
    ZeroAddressEntry(&'static str),
    #[error("stored {kind} for {account} is zero")]
    ZeroEntry { kind: &'static str, account: Address },
}

/// Wire form of [`Ledger`], checked before it becomes one.
#[derive(Deserialize)]
struct LedgerRepr {
    total_supply: Amount,
    balances: BTreeMap<Address, Amount>,
    allowances: BTreeMap<Address, BTreeMap<Address, Amount>>,
    events: Vec<LedgerEvent>,
}

impl TryFrom<LedgerRepr> for Ledger {
    type Error = LedgerStateError;

    fn try_from(repr: LedgerRepr) -> Result<Self, Self::Error> {
        let mut sum = Amount::zero();
        for (account, balance) in &repr.balances {
            if account.is_zero() {
                return Err(LedgerStateError::ZeroAddressEntry("balance"));
            }
            if balance.is_zero() {
                return Err(LedgerStateError::ZeroEntry {
                    kind: "balance",
                    account: *account,
                });
            }
            sum = sum
                .checked_add(*balance)
                .ok_or(LedgerStateError::BalanceOverflow)?;
        }
        if sum != repr.total_supply {
            return Err(LedgerStateError::SupplyMismatch {
                sum,
                total_supply: repr.total_supply,
            });
        }
        for (owner, spenders) in &repr.allowances {
            if owner.is_zero() {
                return Err(LedgerStateError::ZeroAddressEntry("allowance"));
            }
            if spenders.is_empty() {
                return Err(LedgerStateError::ZeroEntry {
                    kind: "allowance set",
                    account: *owner,
                });
            }
            for (spender, amount) in spenders {
                if spender.is_zero() {
                    return Err(LedgerStateError::ZeroAddressEntry("allowance"));
                }
                if amount.is_zero() {
                    return Err(LedgerStateError::ZeroEntry {
                        kind: "allowance",
                        account: *owner,
                    });
                }
            }
        }
        Ok(Ledger {
            total_supply: repr.total_supply,
            balances: repr.balances,
            allowances: repr.allowances,
            events: repr.events,
        })
    }
}

impl Ledger {
    /// Mints the whole supply to `holder`. Nothing can be minted afterwards.
    pub fn with_supply(holder: Address, total_supply: Amount) -> TokenResult<Self> {
        if holder.is_zero() {
            return Err(TokenError::ZeroAddress("mint to"));
        }
        let mut ledger = Ledger {
            total_supply,
            ..Ledger::default()
        };
        ledger.set_balance(holder, total_supply);
        ledger.events.push(LedgerEvent::Transfer {
            from: Address::ZERO,
            to: holder,
            amount: total_supply,
        });
        Ok(ledger)
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Appends an event produced outside the ledger (e.g. ownership changes).
    pub fn record(&mut self, event: LedgerEvent) {
        self.events.push(event);
    }

    /// Sum over every stored balance. Equals `total_supply` at all times.
    pub fn sum_of_balances(&self) -> Amount {
        self.balances
            .values()
            .fold(Amount::zero(), |acc, balance| acc + *balance)
    }

    pub fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> TokenResult<()> {
        self.check_transfer(&from, &to, amount)?;
        self.apply_transfer(from, to, amount);
        Ok(())
    }

    pub fn approve(&mut self, owner: Address, spender: Address, amount: Amount) -> TokenResult<()> {
        check_approve(&owner, &spender)?;
        self.apply_approve(owner, spender, amount);
        Ok(())
    }

    /// Panics if the allowance would exceed 2^256 - 1; supply sits far below
    /// that ceiling, so reaching it means the caller's bookkeeping is broken.
    pub fn increase_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        delta: Amount,
    ) -> TokenResult<()> {
        let current = self.allowance(&owner, &spender);
        let (updated, overflow) = current.overflowing_add(delta);
        if overflow {
            panic!("allowance of {spender} from {owner} overflowed 256 bits");
        }
        self.approve(owner, spender, updated)
    }

    /// Underflow is checked before the zero-address checks inside `approve`.
    pub fn decrease_allowance(
        &mut self,
        owner: Address,
        spender: Address,
        delta: Amount,
    ) -> TokenResult<()> {
        let current = self.allowance(&owner, &spender);
        if delta > current {
            return Err(TokenError::AllowanceUnderflow);
        }
        self.approve(owner, spender, current - delta)
    }

    /// Moves `amount` out of `owner` on behalf of `spender`.
    ///
    /// Checks run in this order: zero owner, allowance, zero spender, zero
    /// destination, balance. The allowance is debited and the transfer applied
    /// only after every check has passed.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> TokenResult<()> {
        if owner.is_zero() {
            return Err(TokenError::ZeroAddress("approve from"));
        }
        let current = self.allowance(&owner, &spender);
        if amount > current {
            return Err(TokenError::InsufficientAllowance);
        }
        check_approve(&owner, &spender)?;
        self.check_transfer(&owner, &to, amount)?;

        self.apply_approve(owner, spender, current - amount);
        self.apply_transfer(owner, to, amount);
        Ok(())
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            total_supply: self.total_supply,
            balances: self.balances.clone(),
            allowances: self.allowances.clone(),
            events: self.events.clone(),
            state_root: self.state_root(),
        }
    }

    pub fn state_root(&self) -> [u8; 32] {
        compute_merkle_root(self.total_supply, &self.balances, &self.allowances)
    }

    fn check_transfer(&self, from: &Address, to: &Address, amount: Amount) -> TokenResult<()> {
        if from.is_zero() {
            return Err(TokenError::ZeroAddress("transfer from"));
        }
        if to.is_zero() {
            return Err(TokenError::ZeroAddress("transfer to"));
        }
        if amount > self.balance_of(from) {
            return Err(TokenError::InsufficientBalance);
        }
        Ok(())
    }

    // Callers must have run `check_transfer` first.
    fn apply_transfer(&mut self, from: Address, to: Address, amount: Amount) {
        let from_balance = self.balance_of(&from) - amount;
        self.set_balance(from, from_balance);
        let to_balance = self.balance_of(&to) + amount;
        self.set_balance(to, to_balance);
        debug!(%from, %to, %amount, "transfer committed");
        self.events.push(LedgerEvent::Transfer { from, to, amount });
    }

    fn apply_approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            if let Some(spenders) = self.allowances.get_mut(&owner) {
                spenders.remove(&spender);
                if spenders.is_empty() {
                    self.allowances.remove(&owner);
                }
            }
        } else {
            self.allowances
                .entry(owner)
                .or_default()
                .insert(spender, amount);
        }
        debug!(%owner, %spender, %amount, "allowance set");
        self.events.push(LedgerEvent::Approval {
            owner,
            spender,
            amount,
        });
    }

    fn set_balance(&mut self, account: Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, amount);
        }
    }
}

fn check_approve(owner: &Address, spender: &Address) -> TokenResult<()> {
    if owner.is_zero() {
        return Err(TokenError::ZeroAddress("approve from"));
    }
    if spender.is_zero() {
        return Err(TokenError::ZeroAddress("approve to"));
    }
    Ok(())
}

fn amount_bytes(amount: &Amount) -> [u8; 32] {
    let mut out = [0u8; 32];
    amount.to_big_endian(&mut out);
    out
}

fn compute_merkle_root(
    total_supply: Amount,
    balances: &BTreeMap<Address, Amount>,
    allowances: &BTreeMap<Address, BTreeMap<Address, Amount>>,
) -> [u8; 32] {
    let mut leaves: Vec<[u8; 32]> = Vec::new();
    let mut hasher = Sha256::new();
    hasher.update(b"supply");
    hasher.update(amount_bytes(&total_supply));
    leaves.push(hasher.finalize().into());
    for (account, balance) in balances {
        let mut hasher = Sha256::new();
        hasher.update(b"bal");
        hasher.update(account.0);
        hasher.update(amount_bytes(balance));
        leaves.push(hasher.finalize().into());
    }
    for (owner, spenders) in allowances {
        for (spender, amount) in spenders {
            let mut hasher = Sha256::new();
            hasher.update(b"allow");
            hasher.update(owner.0);
            hasher.update(spender.0);
            hasher.update(amount_bytes(amount));
            leaves.push(hasher.finalize().into());
        }
    }
    build_merkle(leaves)
}

// `leaves` always holds at least the supply leaf.
fn build_merkle(mut leaves: Vec<[u8; 32]>) -> [u8; 32] {
    while leaves.len() > 1 {
        let mut next = Vec::with_capacity((leaves.len() + 1) / 2);
        for chunk in leaves.chunks(2) {
            let mut hasher = Sha256::new();
            hasher.update(b"node");
            hasher.update(chunk[0]);
            if chunk.len() == 2 {
                hasher.update(chunk[1]);
            } else {
                hasher.update(chunk[0]);
            }
            next.push(hasher.finalize().into());
        }
        leaves = next;
    }
    leaves[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn addr(b: u8) -> Address {
        Address([b; 20])
    }

    fn amt(v: u64) -> Amount {
        Amount::from(v)
    }

    fn funded(supply: u64) -> Ledger {
        Ledger::with_supply(addr(1), amt(supply)).unwrap()
    }

    #[test]
    fn mint_goes_to_holder_and_is_logged() {
        let ledger = funded(1_000);
        assert_eq!(ledger.balance_of(&addr(1)), amt(1_000));
        assert_eq!(ledger.total_supply(), amt(1_000));
        assert_eq!(
            ledger.events(),
            &[LedgerEvent::Transfer {
                from: Address::ZERO,
                to: addr(1),
                amount: amt(1_000),
            }]
        );
        assert!(matches!(
            Ledger::with_supply(Address::ZERO, amt(1)),
            Err(TokenError::ZeroAddress(_))
        ));
    }

    #[test]
    fn transfer_to_zero_is_rejected_without_side_effects() {
        let mut ledger = funded(1_000);
        let before = ledger.clone();
        let err = ledger.transfer(addr(1), Address::ZERO, amt(1)).unwrap_err();
        assert_eq!(err, TokenError::ZeroAddress("transfer to"));
        assert_eq!(ledger, before);
    }

    #[test]
    fn transfer_more_than_balance_fails() {
        let mut ledger = funded(1_000);
        ledger.transfer(addr(1), addr(2), amt(1)).unwrap();
        let before = ledger.clone();
        assert_eq!(
            ledger.transfer(addr(2), addr(3), amt(2)),
            Err(TokenError::InsufficientBalance)
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn self_transfer_keeps_balance() {
        let mut ledger = funded(1_000);
        ledger.transfer(addr(1), addr(1), amt(400)).unwrap();
        assert_eq!(ledger.balance_of(&addr(1)), amt(1_000));
    }

    #[test]
    fn approve_overwrites_rather_than_adds() {
        let mut ledger = funded(1_000);
        ledger.approve(addr(1), addr(2), amt(50)).unwrap();
        ledger.approve(addr(1), addr(2), amt(20)).unwrap();
        assert_eq!(ledger.allowance(&addr(1), &addr(2)), amt(20));
        assert_eq!(
            ledger.approve(addr(1), Address::ZERO, amt(1)),
            Err(TokenError::ZeroAddress("approve to"))
        );
    }

    #[test]
    fn allowance_round_trip() {
        let mut ledger = funded(1_000);
        ledger.approve(addr(1), addr(2), amt(100)).unwrap();
        ledger.increase_allowance(addr(1), addr(2), amt(35)).unwrap();
        assert_eq!(ledger.allowance(&addr(1), &addr(2)), amt(135));
        ledger.decrease_allowance(addr(1), addr(2), amt(35)).unwrap();
        assert_eq!(ledger.allowance(&addr(1), &addr(2)), amt(100));
    }

    #[test]
    fn decrease_below_zero_is_rejected() {
        let mut ledger = funded(1_000);
        ledger.approve(addr(1), addr(2), amt(5)).unwrap();
        assert_eq!(
            ledger.decrease_allowance(addr(1), addr(2), amt(6)),
            Err(TokenError::AllowanceUnderflow)
        );
        assert_eq!(ledger.allowance(&addr(1), &addr(2)), amt(5));
    }

    #[test]
    fn decrease_checks_underflow_before_zero_spender() {
        let mut ledger = funded(1_000);
        assert_eq!(
            ledger.decrease_allowance(addr(1), Address::ZERO, amt(1)),
            Err(TokenError::AllowanceUnderflow)
        );
        assert_eq!(
            ledger.decrease_allowance(addr(1), Address::ZERO, amt(0)),
            Err(TokenError::ZeroAddress("approve to"))
        );
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn allowance_overflow_is_fatal() {
        let mut ledger = funded(1_000);
        ledger.approve(addr(1), addr(2), Amount::MAX).unwrap();
        let _ = ledger.increase_allowance(addr(1), addr(2), amt(1));
    }

    #[test]
    fn transfer_from_zero_owner_fails_before_allowance() {
        let mut ledger = funded(1_000);
        assert_eq!(
            ledger.transfer_from(addr(1), Address::ZERO, addr(1), amt(0)),
            Err(TokenError::ZeroAddress("approve from"))
        );
    }

    #[test]
    fn transfer_from_without_allowance_fails() {
        let mut ledger = funded(1_000);
        assert_eq!(
            ledger.transfer_from(addr(2), addr(1), addr(2), amt(1)),
            Err(TokenError::InsufficientAllowance)
        );
    }

    #[test]
    fn transfer_from_spends_allowance_atomically() {
        let mut ledger = funded(10);
        ledger.approve(addr(1), addr(2), amt(100)).unwrap();

        // Allowance covers it but the balance does not; nothing may change.
        let before = ledger.clone();
        assert_eq!(
            ledger.transfer_from(addr(2), addr(1), addr(3), amt(11)),
            Err(TokenError::InsufficientBalance)
        );
        assert_eq!(
            ledger.transfer_from(addr(2), addr(1), Address::ZERO, amt(1)),
            Err(TokenError::ZeroAddress("transfer to"))
        );
        assert_eq!(ledger, before);

        ledger.transfer_from(addr(2), addr(1), addr(3), amt(4)).unwrap();
        assert_eq!(ledger.allowance(&addr(1), &addr(2)), amt(96));
        assert_eq!(ledger.balance_of(&addr(3)), amt(4));
        assert_eq!(ledger.balance_of(&addr(1)), amt(6));
    }

    #[test]
    fn state_root_tracks_state() {
        let mut a = funded(1_000);
        let b = funded(1_000);
        assert_eq!(a.state_root(), b.state_root());
        a.transfer(addr(1), addr(2), amt(1)).unwrap();
        assert_ne!(a.state_root(), b.state_root());
        a.transfer(addr(2), addr(1), amt(1)).unwrap();
        assert_eq!(a.state_root(), b.state_root());
        assert_eq!(a.snapshot().state_root, a.state_root());
    }

    #[test]
    fn address_parses_and_prints_hex() {
        let a: Address = "0x0101010101010101010101010101010101010101".parse().unwrap();
        assert_eq!(a, addr(1));
        assert_eq!(a.to_string(), "0x0101010101010101010101010101010101010101");
        assert!("0x01".parse::<Address>().is_err());
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), a);
    }

    #[derive(Clone, Debug)]
    enum Op {
        Transfer(u8, u8, u64),
        Approve(u8, u8, u64),
        Increase(u8, u8, u64),
        Decrease(u8, u8, u64),
        TransferFrom(u8, u8, u8, u64),
    }

    fn reload(value: serde_json::Value) -> Result<Ledger, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn deserialized_ledger_round_trips() {
        let mut ledger = funded(1_000);
        ledger.transfer(addr(1), addr(2), amt(40)).unwrap();
        ledger.approve(addr(2), addr(3), amt(5)).unwrap();
        let value = serde_json::to_value(&ledger).unwrap();
        assert_eq!(reload(value).unwrap(), ledger);
    }

    #[test]
    fn tampered_balances_are_rejected() {
        let mut value = serde_json::to_value(funded(1_000)).unwrap();
        value["balances"][addr(1).to_string()] = json!("0x1388");
        let err = reload(value).unwrap_err();
        assert!(err.to_string().contains("total supply"), "{err}");
    }

    #[test]
    fn zero_address_entries_are_rejected() {
        let mut value = serde_json::to_value(funded(1_000)).unwrap();
        value["balances"][addr(1).to_string()] = json!("0x3e1");
        value["balances"][Address::ZERO.to_string()] = json!("0x7");
        assert!(reload(value).is_err());

        let mut value = serde_json::to_value(funded(1_000)).unwrap();
        value["allowances"] = json!({ addr(1).to_string(): { Address::ZERO.to_string(): "0x1" } });
        assert!(reload(value).is_err());
    }

    #[test]
    fn stored_zero_entries_are_rejected() {
        let mut value = serde_json::to_value(funded(1_000)).unwrap();
        value["balances"][addr(2).to_string()] = json!("0x0");
        assert!(reload(value).is_err());

        let mut value = serde_json::to_value(funded(1_000)).unwrap();
        value["allowances"] = json!({ addr(1).to_string(): { addr(2).to_string(): "0x0" } });
        assert!(reload(value).is_err());

        let mut value = serde_json::to_value(funded(1_000)).unwrap();
        value["allowances"] = json!({ addr(1).to_string(): {} });
        assert!(reload(value).is_err());
    }

    // Account 0 maps to the zero address so rejections get exercised too.
    fn account(i: u8) -> Address {
        if i == 0 {
            Address::ZERO
        } else {
            addr(i)
        }
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let who = 0u8..5;
        prop_oneof![
            (who.clone(), who.clone(), 0u64..2_000).prop_map(|(a, b, v)| Op::Transfer(a, b, v)),
            (who.clone(), who.clone(), 0u64..2_000).prop_map(|(a, b, v)| Op::Approve(a, b, v)),
            (who.clone(), who.clone(), 0u64..2_000).prop_map(|(a, b, v)| Op::Increase(a, b, v)),
            (who.clone(), who.clone(), 0u64..2_000).prop_map(|(a, b, v)| Op::Decrease(a, b, v)),
            (who.clone(), who.clone(), who, 0u64..2_000)
                .prop_map(|(s, o, t, v)| Op::TransferFrom(s, o, t, v)),
        ]
    }

    proptest! {
        #[test]
        fn prop_supply_is_conserved(ops in proptest::collection::vec(op_strategy(), 1..64)) {
            let mut ledger = funded(1_000);
            for op in ops {
                let before = ledger.clone();
                let result = match op {
                    Op::Transfer(a, b, v) => ledger.transfer(account(a), account(b), amt(v)),
                    Op::Approve(a, b, v) => ledger.approve(account(a), account(b), amt(v)),
                    Op::Increase(a, b, v) => {
                        ledger.increase_allowance(account(a), account(b), amt(v))
                    }
                    Op::Decrease(a, b, v) => {
                        ledger.decrease_allowance(account(a), account(b), amt(v))
                    }
                    Op::TransferFrom(s, o, t, v) => {
                        ledger.transfer_from(account(s), account(o), account(t), amt(v))
                    }
                };
                if result.is_err() {
                    prop_assert_eq!(&ledger, &before);
                }
                prop_assert_eq!(ledger.sum_of_balances(), ledger.total_supply());
                prop_assert!(ledger.balance_of(&Address::ZERO).is_zero());
            }
        }
    }
}
