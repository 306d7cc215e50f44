use soroban_sdk::{Address, Bytes, BytesN, Env, String, Symbol};

pub fn emit_initialized(e: &Env, admin: &Address, delay: u64) {
    e.events().publish(
        (Symbol::new(e, "timelock_initialized"), admin.clone()),
        delay,
    );
}

pub fn emit_new_admin(e: &Env, new_admin: &Address) {
    e.events().publish((Symbol::new(e, "new_admin"), new_admin.clone()), ());
}

pub fn emit_new_pending_admin(e: &Env, new_pending_admin: &Address) {
    e.events().publish(
        (Symbol::new(e, "new_pending_admin"), new_pending_admin.clone()),
        (),
    );
}

pub fn emit_new_delay(e: &Env, new_delay: u64) {
    e.events().publish((Symbol::new(e, "new_delay"), new_delay), ());
}

/// Fields shared by the queue, cancel and execute events.
pub struct TransactionFields<'a> {
    pub hash: &'a BytesN<32>,
    pub target: &'a Address,
    pub value: i128,
    pub signature: &'a String,
    pub data: &'a Bytes,
    pub eta: u64,
}

/// # Topics
/// * `Symbol` - "queue_transaction"
/// * `BytesN<32>` - The transaction hash
/// * `Address` - The target
///
/// # Data
/// * `(i128, String, Bytes, u64)` - value, signature, data, eta
pub fn emit_queue_transaction(e: &Env, tx: &TransactionFields) {
    publish_transaction(e, "queue_transaction", tx);
}

pub fn emit_cancel_transaction(e: &Env, tx: &TransactionFields) {
    publish_transaction(e, "cancel_transaction", tx);
}

/// Same layout as `queue_transaction`, with the XDR of the call's return
/// value appended to the data.
pub fn emit_execute_transaction(e: &Env, tx: &TransactionFields, return_data: &Bytes) {
    let topics = (
        Symbol::new(e, "execute_transaction"),
        tx.hash.clone(),
        tx.target.clone(),
    );
    let data = (
        tx.value,
        tx.signature.clone(),
        tx.data.clone(),
        tx.eta,
        return_data.clone(),
    );
    e.events().publish(topics, data);
}

/// Emitted when an executed transaction's call failed. The hash stays consumed.
pub fn emit_execution_reverted(e: &Env, hash: &BytesN<32>, target: &Address, code: u32) {
    let topics = (
        Symbol::new(e, "execution_reverted"),
        hash.clone(),
        target.clone(),
    );
    e.events().publish(topics, code);
}

fn publish_transaction(e: &Env, name: &str, tx: &TransactionFields) {
    let topics = (Symbol::new(e, name), tx.hash.clone(), tx.target.clone());
    let data = (tx.value, tx.signature.clone(), tx.data.clone(), tx.eta);
    e.events().publish(topics, data);
}
