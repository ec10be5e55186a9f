//! Ledger service
//!
//! Computes the balance mean and runs the two mutating sweeps over every
//! balance record. Sweeps run sequentially; each per-user write commits on
//! its own, so a failure partway leaves earlier writes in place.

use chrono::{NaiveDate, Utc};
use credit_core::ledger::{adjusted_balance, flat_add_balance, reward_for};
use credit_core::{Amount, SweepKind, SweepReport};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{FlatAddRequest, RewardRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reward reference date used when the caller does not supply one
///
/// `today` is a UTC calendar date, matching how post timestamps are stored.
pub fn default_reward_date(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

/// Ledger service
pub struct LedgerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LedgerService<'a> {
    /// Create a new LedgerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fail with `NotFound` while the credit system is switched off
    pub fn ensure_enabled(&self) -> ServiceResult<()> {
        if self.ctx.is_enabled() {
            Ok(())
        } else {
            Err(ServiceError::not_found("Credit system", "disabled"))
        }
    }

    /// Check the presented API key
    #[instrument(skip_all)]
    pub async fn authorize(&self, api_key: Option<&str>) -> ServiceResult<()> {
        let Some(key) = api_key.filter(|k| !k.is_empty()) else {
            debug!("Request without API key rejected");
            return Err(ServiceError::InvalidAccess);
        };

        if self.ctx.authorizer().is_authorized(key).await? {
            Ok(())
        } else {
            warn!("Request with unknown API key rejected");
            Err(ServiceError::InvalidAccess)
        }
    }

    /// Mean of all balances, `None` when nobody holds a balance
    #[instrument(skip(self))]
    pub async fn compute_mean(&self) -> ServiceResult<Option<f64>> {
        self.ensure_enabled()?;

        let mean = self
            .ctx
            .balance_repo()
            .mean(self.ctx.policy().field_name())
            .await?;

        debug!(?mean, "Computed credit mean");
        Ok(mean)
    }

    /// Validate a flat-add request and run the sweep
    pub async fn apply_flat_add(&self, request: &FlatAddRequest) -> ServiceResult<SweepReport> {
        self.ensure_enabled()?;
        request.validate()?;
        let amount = request.amount()?;
        self.flat_add(amount).await
    }

    /// Add `amount` (scaled by each user's polarity) to every balance, without a cap
    #[instrument(skip(self), fields(amount = amount.value()))]
    pub async fn flat_add(&self, amount: Amount) -> ServiceResult<SweepReport> {
        self.ensure_enabled()?;

        let field = self.ctx.policy().field_name();
        let records = self.ctx.balance_repo().find_all(field).await?;
        let mut report = SweepReport::new(SweepKind::FlatAdd);

        for record in records {
            let current = record.balance();
            let polarity = self.ctx.polarity_signal().polarity(record.user_id).await?;
            let new_balance = flat_add_balance(current, amount.value(), polarity);

            self.ctx
                .balance_repo()
                .update_balance(field, record.user_id, new_balance)
                .await?;
            report.record(current, new_balance, false);
        }

        info!(
            sweep = %report.kind,
            visited = report.visited,
            changed = report.changed,
            "Flat credit sweep applied"
        );
        Ok(report)
    }

    /// Validate a reward request and run the sweep
    ///
    /// The reference date defaults to yesterday on the UTC calendar.
    pub async fn apply_rewards(&self, request: &RewardRequest) -> ServiceResult<SweepReport> {
        self.ensure_enabled()?;
        request.validate()?;
        let amount = request.amount()?;
        let date = request
            .reference_date()?
            .unwrap_or_else(|| default_reward_date(Utc::now().date_naive()));
        self.rewards(amount, date).await
    }

    /// Reward every balance holder for their posting activity on `date`, capped
    #[instrument(skip(self), fields(amount = amount.value(), %date))]
    pub async fn rewards(&self, amount: Amount, date: NaiveDate) -> ServiceResult<SweepReport> {
        self.ensure_enabled()?;

        let policy = self.ctx.policy();
        let field = policy.field_name();
        let records = self.ctx.balance_repo().find_all(field).await?;
        let mut report = SweepReport::new(SweepKind::Rewards);

        for record in records {
            let user_id = record.user_id;
            let snapshot = self.ctx.activity_repo().snapshot(user_id, date).await?;
            let followers = self.ctx.follower_signal().followers(user_id).await?;
            let reward = reward_for(amount.value(), &snapshot, followers);

            // Balance is re-read after the activity lookup, as close to the write as possible.
            let Some(current_record) = self.ctx.balance_repo().find_by_user(field, user_id).await?
            else {
                debug!(%user_id, "Balance record vanished during sweep, skipping");
                continue;
            };
            let current = current_record.balance();

            let adjusted = adjusted_balance(current, reward, snapshot.polarization_score);
            let (final_balance, capped) = policy.cap(adjusted);

            self.ctx
                .balance_repo()
                .update_balance(field, user_id, final_balance)
                .await?;
            report.record(current, final_balance, capped);

            debug!(
                %user_id,
                posts = snapshot.posts_on_date,
                likes = snapshot.likes_on_date,
                reward,
                final_balance,
                capped,
                "Reward applied"
            );
        }

        info!(
            sweep = %report.kind,
            visited = report.visited,
            changed = report.changed,
            capped = report.capped,
            "Reward sweep applied"
        );
        Ok(report)
    }
}
