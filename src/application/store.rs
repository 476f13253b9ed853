use crate::domain::beneficiary::{self, Beneficiary, BeneficiaryDraft, BeneficiaryUpdate};
use crate::domain::payment::{Amount, Payment, PaymentUpdate};
use crate::domain::ports::{BENEFICIARIES, PAYMENTS, SnapshotStoreBox};
use crate::error::{PaymentError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

/// Authoritative owner of the beneficiary and payment collections.
///
/// All mutation goes through this service. Every mutation serializes the full
/// affected collection(s) to the snapshot backend and commits to memory only
/// after the write succeeds, so the in-memory and durable states never
/// diverge silently. A persistence failure aborts the operation.
pub struct RecordStore {
    beneficiaries: RwLock<Vec<Beneficiary>>,
    payments: RwLock<Vec<Payment>>,
    snapshots: SnapshotStoreBox,
}

impl RecordStore {
    /// Loads prior snapshots from the backend, falling back to the seed
    /// dataset (beneficiaries) or an empty list (payments) when a snapshot is
    /// absent, unreadable or corrupt. Never fails.
    pub async fn open(snapshots: SnapshotStoreBox) -> Self {
        let beneficiaries = Self::load_collection(&snapshots, BENEFICIARIES)
            .await
            .unwrap_or_else(beneficiary::seed);
        let payments = Self::load_collection(&snapshots, PAYMENTS)
            .await
            .unwrap_or_default();
        Self {
            beneficiaries: RwLock::new(beneficiaries),
            payments: RwLock::new(payments),
            snapshots,
        }
    }

    async fn load_collection<T: DeserializeOwned>(
        snapshots: &SnapshotStoreBox,
        collection: &str,
    ) -> Option<Vec<T>> {
        match snapshots.load(collection).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(items) => Some(items),
                Err(e) => {
                    warn!(collection, error = %e, "discarding corrupt snapshot");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(collection, error = %e, "snapshot backend unreadable");
                None
            }
        }
    }

    fn next_id() -> String {
        Uuid::new_v4().simple().to_string()
    }

    async fn persist<T: Serialize>(&self, collection: &str, items: &[T]) -> Result<()> {
        let bytes = serde_json::to_vec(items)
            .map_err(|e| PaymentError::Persistence(format!("{collection}: {e}")))?;
        self.snapshots.save(collection, bytes).await
    }

    // ---- reads ----

    pub async fn beneficiaries(&self) -> Vec<Beneficiary> {
        self.beneficiaries.read().await.clone()
    }

    pub async fn beneficiary(&self, id: &str) -> Option<Beneficiary> {
        self.beneficiaries
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub async fn payments(&self) -> Vec<Payment> {
        self.payments.read().await.clone()
    }

    pub async fn payment(&self, id: &str) -> Option<Payment> {
        self.payments
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    // ---- beneficiary mutations ----

    pub async fn add_beneficiary(&self, draft: BeneficiaryDraft) -> Result<Beneficiary> {
        draft.validate()?;
        let mut beneficiaries = self.beneficiaries.write().await;
        let record = draft.into_record(Self::next_id());
        let mut next = beneficiaries.clone();
        next.push(record.clone());
        self.persist(BENEFICIARIES, &next).await?;
        *beneficiaries = next;
        Ok(record)
    }

    pub async fn update_beneficiary(
        &self,
        id: &str,
        update: BeneficiaryUpdate,
    ) -> Result<Beneficiary> {
        let mut beneficiaries = self.beneficiaries.write().await;
        let index = beneficiaries
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| PaymentError::NotFound(format!("beneficiary {id}")))?;

        let mut record = beneficiaries[index].clone();
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(account_number) = update.account_number {
            record.account_number = account_number;
        }
        if let Some(ifsc_code) = update.ifsc_code {
            record.ifsc_code = ifsc_code;
        }
        if let Some(account_type) = update.account_type {
            record.account_type = account_type;
        }
        if let Some(place) = update.place {
            record.place = place;
        }
        if let Some(email) = update.email {
            record.email = email;
        }
        if let Some(mobile) = update.mobile {
            record.mobile = mobile;
        }

        for (field, value) in [
            ("name", &record.name),
            ("accountNumber", &record.account_number),
            ("ifscCode", &record.ifsc_code),
        ] {
            if value.trim().is_empty() {
                return Err(PaymentError::Validation(format!(
                    "{field} may not be blank"
                )));
            }
        }

        let mut next = beneficiaries.clone();
        next[index] = record.clone();
        self.persist(BENEFICIARIES, &next).await?;
        *beneficiaries = next;
        Ok(record)
    }

    /// Removes a beneficiary together with every payment referencing it, as a
    /// single transactional mutation. No dangling payment survives.
    pub async fn delete_beneficiary(&self, id: &str) -> Result<()> {
        self.delete_beneficiaries(&[id.to_string()]).await
    }

    /// Cascade delete for a set of ids, applied atomically. Ids with no
    /// matching record are ignored; the call fails with `NotFound` only when
    /// none of the ids exist.
    pub async fn delete_beneficiaries(&self, ids: &[String]) -> Result<()> {
        let mut beneficiaries = self.beneficiaries.write().await;
        let mut payments = self.payments.write().await;

        let next_beneficiaries: Vec<Beneficiary> = beneficiaries
            .iter()
            .filter(|b| !ids.contains(&b.id))
            .cloned()
            .collect();
        if next_beneficiaries.len() == beneficiaries.len() {
            return Err(PaymentError::NotFound(format!(
                "beneficiaries {}",
                ids.join(", ")
            )));
        }
        let next_payments: Vec<Payment> = payments
            .iter()
            .filter(|p| !ids.contains(&p.beneficiary_id))
            .cloned()
            .collect();

        // Payments are written first: if the second write fails, the durable
        // state may have lost payments but can never hold a payment whose
        // beneficiary is gone.
        self.persist(PAYMENTS, &next_payments).await?;
        self.persist(BENEFICIARIES, &next_beneficiaries).await?;
        *beneficiaries = next_beneficiaries;
        *payments = next_payments;
        Ok(())
    }

    /// Bulk append of normalized import records. Each draft gets a fresh id;
    /// the whole batch is persisted in one write, so a failure imports
    /// nothing. Duplicates against existing records are allowed.
    pub async fn import_beneficiaries(
        &self,
        drafts: Vec<BeneficiaryDraft>,
    ) -> Result<Vec<Beneficiary>> {
        let mut beneficiaries = self.beneficiaries.write().await;
        let imported: Vec<Beneficiary> = drafts
            .into_iter()
            .map(|draft| draft.into_record(Self::next_id()))
            .collect();
        let mut next = beneficiaries.clone();
        next.extend(imported.iter().cloned());
        self.persist(BENEFICIARIES, &next).await?;
        *beneficiaries = next;
        Ok(imported)
    }

    // ---- payment mutations ----

    pub async fn add_payment(&self, beneficiary_id: String, amount: Amount) -> Result<Payment> {
        let mut payments = self.payments.write().await;
        let payment = Payment {
            id: Self::next_id(),
            beneficiary_id,
            amount,
        };
        let mut next = payments.clone();
        next.push(payment.clone());
        self.persist(PAYMENTS, &next).await?;
        *payments = next;
        Ok(payment)
    }

    pub async fn update_payment(&self, id: &str, update: PaymentUpdate) -> Result<Payment> {
        let mut payments = self.payments.write().await;
        let index = payments
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PaymentError::NotFound(format!("payment {id}")))?;

        let mut payment = payments[index].clone();
        if let Some(beneficiary_id) = update.beneficiary_id {
            payment.beneficiary_id = beneficiary_id;
        }
        if let Some(amount) = update.amount {
            payment.amount = amount;
        }

        let mut next = payments.clone();
        next[index] = payment.clone();
        self.persist(PAYMENTS, &next).await?;
        *payments = next;
        Ok(payment)
    }

    pub async fn delete_payment(&self, id: &str) -> Result<()> {
        let mut payments = self.payments.write().await;
        let next: Vec<Payment> = payments.iter().filter(|p| p.id != id).cloned().collect();
        if next.len() == payments.len() {
            return Err(PaymentError::NotFound(format!("payment {id}")));
        }
        self.persist(PAYMENTS, &next).await?;
        *payments = next;
        Ok(())
    }

    pub async fn clear_payments(&self) -> Result<()> {
        let mut payments = self.payments.write().await;
        self.persist(PAYMENTS, &[] as &[Payment]).await?;
        payments.clear();
        Ok(())
    }
}
