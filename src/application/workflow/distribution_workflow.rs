//! OTP-gated ration distribution workflow.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::state::WorkflowState;
use crate::domain::entities::{
    CardNumber, Citizen, DistributionQuote, DistributionRecord, Entitlement, GrainType, OtpCode,
    Session,
};
use crate::domain::errors::{GatewayError, WorkflowError};
use crate::domain::ports::ShopkeeperPort;

/// Drives one distribution run: pick a citizen, quote a grain, have the
/// backend email an OTP, and commit once the operator relays the code.
///
/// The roster and entitlement list are fetched once at start and reused;
/// [`Self::refresh`] re-fetches both on demand. Input validation happens
/// before any network call, and every backend failure leaves the state
/// where it was so the operator can retry or cancel.
pub struct DistributionWorkflow {
    gateway: Arc<dyn ShopkeeperPort>,
    operator_id: i64,
    run_id: Uuid,
    roster: Vec<Citizen>,
    entitlements: Vec<Entitlement>,
    state: WorkflowState,
}

impl DistributionWorkflow {
    /// Starts a workflow for the authenticated operator, priming the
    /// citizen roster and entitlement caches.
    ///
    /// # Errors
    /// Returns an error if either cache cannot be fetched.
    pub async fn start(
        session: &Session,
        gateway: Arc<dyn ShopkeeperPort>,
    ) -> Result<Self, WorkflowError> {
        let operator_id = session.user_id();
        let run_id = Uuid::new_v4();

        debug!(%run_id, operator_id, "Starting distribution workflow");

        let roster = gateway
            .citizens_under_shop(operator_id)
            .await
            .map_err(Self::cache_error)?;
        let entitlements = gateway.entitlements().await.map_err(Self::cache_error)?;

        info!(
            %run_id,
            citizens = roster.len(),
            entitlements = entitlements.len(),
            "Workflow caches primed"
        );

        Ok(Self {
            gateway,
            operator_id,
            run_id,
            roster,
            entitlements,
            state: WorkflowState::Idle,
        })
    }

    /// Selects a citizen by card number.
    ///
    /// The cached roster is consulted first; on a miss the roster is
    /// re-fetched from the backend before giving up.
    ///
    /// # Errors
    /// Returns a validation error for a malformed card number (before any
    /// network call), or not-found when the card is not registered under
    /// the operator's shop. Neither changes the state.
    pub async fn select_citizen(&mut self, card_number: &str) -> Result<Citizen, WorkflowError> {
        self.ensure_selection_allowed("select_citizen")?;

        let card = CardNumber::new(card_number).ok_or_else(|| {
            WorkflowError::validation("card number must be exactly 12 digits")
        })?;

        if let Some(citizen) = self.roster.iter().find(|c| *c.card_number() == card) {
            let citizen = citizen.clone();
            debug!(run_id = %self.run_id, card = %card, "Citizen found in cached roster");
            self.state = WorkflowState::CitizenSelected {
                citizen: citizen.clone(),
            };
            return Ok(citizen);
        }

        debug!(run_id = %self.run_id, card = %card, "Roster cache miss, re-fetching");
        self.roster = self
            .gateway
            .citizens_under_shop(self.operator_id)
            .await
            .map_err(Self::cache_error)?;

        match self.roster.iter().find(|c| *c.card_number() == card) {
            Some(citizen) => {
                let citizen = citizen.clone();
                self.state = WorkflowState::CitizenSelected {
                    citizen: citizen.clone(),
                };
                Ok(citizen)
            }
            None => {
                warn!(run_id = %self.run_id, card = %card, "Citizen not registered under this shop");
                Err(WorkflowError::citizen_not_found(card.into_inner()))
            }
        }
    }

    /// Selects a citizen from an already-fetched roster entry.
    ///
    /// # Errors
    /// Returns an illegal-state error when a run is past the selection
    /// stage.
    pub fn select_citizen_record(&mut self, citizen: Citizen) -> Result<(), WorkflowError> {
        self.ensure_selection_allowed("select_citizen")?;
        self.state = WorkflowState::CitizenSelected { citizen };
        Ok(())
    }

    /// Selects a grain and quotes the quantity owed to the family.
    ///
    /// A grain with no active entitlement quotes zero; the quote carries
    /// a flag the caller must surface.
    ///
    /// # Errors
    /// Returns an illegal-state error when no citizen is selected.
    pub fn select_grain(&mut self, grain: GrainType) -> Result<DistributionQuote, WorkflowError> {
        let citizen = match &self.state {
            WorkflowState::CitizenSelected { citizen }
            | WorkflowState::GrainSelected { citizen, .. } => citizen.clone(),
            other => return Err(WorkflowError::illegal_state("select_grain", other.name())),
        };

        let quote = DistributionQuote::compute(&citizen, grain, &self.entitlements);

        if quote.entitlement_missing() {
            warn!(run_id = %self.run_id, %grain, "No entitlement configured for grain, quoting zero");
        } else {
            debug!(
                run_id = %self.run_id,
                %grain,
                quantity = quote.computed_quantity(),
                "Quantity quoted"
            );
        }

        self.state = WorkflowState::GrainSelected {
            citizen,
            quote: quote.clone(),
        };
        Ok(quote)
    }

    /// Asks the backend to email an OTP to the selected citizen.
    ///
    /// The code itself never reaches the client; only the dispatch
    /// acknowledgment does.
    ///
    /// # Errors
    /// Returns a dispatch or transport error on failure; the state stays
    /// at grain-selected so the operator can retry.
    pub async fn request_otp(&mut self) -> Result<(), WorkflowError> {
        let (citizen, quote) = match &self.state {
            WorkflowState::GrainSelected { citizen, quote } => (citizen.clone(), quote.clone()),
            other => return Err(WorkflowError::illegal_state("request_otp", other.name())),
        };

        match self
            .gateway
            .request_otp(self.operator_id, citizen.card_number())
            .await
        {
            Ok(()) => {
                info!(
                    run_id = %self.run_id,
                    card = %citizen.card_number(),
                    "OTP dispatched to citizen email"
                );
                self.state = WorkflowState::OtpRequested { citizen, quote };
                Ok(())
            }
            Err(e) if e.is_session_expired() => Err(WorkflowError::SessionExpired),
            Err(e) if e.is_transport() => Err(WorkflowError::transport(e.to_string())),
            Err(e) => {
                warn!(run_id = %self.run_id, error = %e, "OTP dispatch refused");
                Err(WorkflowError::dispatch(e.message().to_string()))
            }
        }
    }

    /// Submits the operator-entered OTP and commits the distribution.
    ///
    /// # Errors
    /// Returns a validation error for a malformed code (before any
    /// network call). A backend refusal keeps the state at otp-requested
    /// with the refusal reason; the backend owns retry limits.
    pub async fn verify_and_commit(
        &mut self,
        otp: &str,
    ) -> Result<DistributionRecord, WorkflowError> {
        let (citizen, quote) = match &self.state {
            WorkflowState::OtpRequested { citizen, quote } => (citizen.clone(), quote.clone()),
            other => {
                return Err(WorkflowError::illegal_state("verify_and_commit", other.name()));
            }
        };

        let otp = OtpCode::new(otp)
            .ok_or_else(|| WorkflowError::validation("OTP must be exactly 6 digits"))?;

        match self
            .gateway
            .distribute(citizen.card_number(), quote.grain(), &otp)
            .await
        {
            Ok(record) => {
                info!(
                    run_id = %self.run_id,
                    distribution_id = record.distribution_id(),
                    quantity = record.quantity_given(),
                    "Distribution committed"
                );
                self.state = WorkflowState::Committed {
                    record: record.clone(),
                };
                Ok(record)
            }
            Err(e) if e.is_session_expired() => Err(WorkflowError::SessionExpired),
            Err(e) if e.is_transport() => Err(WorkflowError::transport(e.to_string())),
            Err(e) => {
                warn!(run_id = %self.run_id, error = %e, "Distribution refused");
                Err(WorkflowError::otp_rejected(e.message().to_string()))
            }
        }
    }

    /// Abandons the current run and returns to idle. No backend call.
    ///
    /// # Errors
    /// Returns an illegal-state error once the run has committed.
    pub fn cancel(&mut self) -> Result<(), WorkflowError> {
        if self.state.is_committed() {
            return Err(WorkflowError::illegal_state("cancel", self.state.name()));
        }

        debug!(run_id = %self.run_id, from = self.state.name(), "Run cancelled");
        self.state = WorkflowState::Idle;
        Ok(())
    }

    /// Re-fetches the roster and entitlement caches.
    ///
    /// # Errors
    /// Returns an illegal-state error once the run has committed, or a
    /// transport error if a fetch fails.
    pub async fn refresh(&mut self) -> Result<(), WorkflowError> {
        if self.state.is_committed() {
            return Err(WorkflowError::illegal_state("refresh", self.state.name()));
        }

        self.roster = self
            .gateway
            .citizens_under_shop(self.operator_id)
            .await
            .map_err(Self::cache_error)?;
        self.entitlements = self.gateway.entitlements().await.map_err(Self::cache_error)?;

        debug!(
            run_id = %self.run_id,
            citizens = self.roster.len(),
            entitlements = self.entitlements.len(),
            "Workflow caches refreshed"
        );
        Ok(())
    }

    /// Current state of the run.
    #[must_use]
    pub const fn state(&self) -> &WorkflowState {
        &self.state
    }

    /// Identifier of this run, carried in log fields.
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Cached roster of the operator's shop.
    #[must_use]
    pub fn roster(&self) -> &[Citizen] {
        &self.roster
    }

    /// Cached entitlement list.
    #[must_use]
    pub fn entitlements(&self) -> &[Entitlement] {
        &self.entitlements
    }

    /// The committed record, once the run has finished.
    #[must_use]
    pub const fn record(&self) -> Option<&DistributionRecord> {
        self.state.record()
    }

    fn ensure_selection_allowed(&self, operation: &'static str) -> Result<(), WorkflowError> {
        match self.state {
            WorkflowState::Idle
            | WorkflowState::CitizenSelected { .. }
            | WorkflowState::GrainSelected { .. } => Ok(()),
            ref other => Err(WorkflowError::illegal_state(operation, other.name())),
        }
    }

    fn cache_error(e: GatewayError) -> WorkflowError {
        if e.is_session_expired() {
            WorkflowError::SessionExpired
        } else {
            WorkflowError::transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    use crate::domain::entities::{
        DistributionStatus, Role, SessionToken, UserAccount,
    };
    use crate::domain::ports::MockShopkeeperPort;

    const CARD: &str = "123456789012";

    fn make_session() -> Session {
        Session::new(
            SessionToken::new_unchecked("test-token"),
            UserAccount::new(1, "Ravi", "ravi@example.com", Role::Shopkeeper),
        )
    }

    fn make_citizen() -> Citizen {
        Citizen::new(
            CardNumber::new_unchecked(CARD),
            "Meena Kumari",
            4,
            "12 Gandhi Road",
            "meena@example.com",
            "Active",
        )
    }

    fn other_citizen() -> Citizen {
        Citizen::new(
            CardNumber::new_unchecked("999999999999"),
            "Someone Else",
            2,
            "7 Patel Street",
            "other@example.com",
            "Active",
        )
    }

    fn rice_entitlement() -> Vec<Entitlement> {
        vec![Entitlement::new(GrainType::Rice, 5.0)]
    }

    fn make_record(quantity: f64) -> DistributionRecord {
        DistributionRecord::new(
            501,
            CardNumber::new_unchecked(CARD),
            GrainType::Rice,
            quantity,
            DistributionStatus::Success,
        )
    }

    /// Mock whose start-up fetches return the standard roster and
    /// entitlements exactly once each.
    fn primed_mock() -> MockShopkeeperPort {
        let mut mock = MockShopkeeperPort::new();
        mock.expect_citizens_under_shop()
            .times(1)
            .returning(|_| Ok(vec![make_citizen()]));
        mock.expect_entitlements()
            .times(1)
            .returning(|| Ok(rice_entitlement()));
        mock
    }

    async fn started(mock: MockShopkeeperPort) -> DistributionWorkflow {
        DistributionWorkflow::start(&make_session(), Arc::new(mock))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_start_primes_caches() {
        let workflow = started(primed_mock()).await;

        assert_eq!(workflow.roster().len(), 1);
        assert_eq!(workflow.entitlements().len(), 1);
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_select_citizen_from_cached_roster() {
        let mut workflow = started(primed_mock()).await;

        let citizen = workflow.select_citizen(CARD).await.unwrap();

        assert_eq!(citizen.head_of_family_name(), "Meena Kumari");
        assert!(matches!(
            workflow.state(),
            WorkflowState::CitizenSelected { .. }
        ));
    }

    #[tokio::test]
    async fn test_select_citizen_refreshes_on_cache_miss() {
        let mut mock = MockShopkeeperPort::new();
        let mut seq = Sequence::new();
        // Start-up roster misses the card; the lookup re-fetch finds it.
        mock.expect_citizens_under_shop()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![other_citizen()]));
        mock.expect_entitlements()
            .times(1)
            .returning(|| Ok(rice_entitlement()));
        mock.expect_citizens_under_shop()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![other_citizen(), make_citizen()]));

        let mut workflow = started(mock).await;
        let citizen = workflow.select_citizen(CARD).await.unwrap();

        assert_eq!(citizen.card_number().as_str(), CARD);
        assert_eq!(workflow.roster().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_citizen_leaves_state_idle() {
        let mut mock = MockShopkeeperPort::new();
        mock.expect_citizens_under_shop()
            .times(2)
            .returning(|_| Ok(vec![other_citizen()]));
        mock.expect_entitlements()
            .times(1)
            .returning(|| Ok(rice_entitlement()));

        let mut workflow = started(mock).await;
        let result = workflow.select_citizen(CARD).await;

        assert!(matches!(
            result,
            Err(WorkflowError::CitizenNotFound { .. })
        ));
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_malformed_card_fails_without_network() {
        // The single roster fetch at start is the only backend call
        // allowed here.
        let mut workflow = started(primed_mock()).await;

        let result = workflow.select_citizen("12345").await;

        assert!(matches!(result, Err(WorkflowError::Validation { .. })));
        assert_eq!(workflow.state(), &WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_select_citizen_record_skips_lookup() {
        let mut workflow = started(primed_mock()).await;

        workflow.select_citizen_record(make_citizen()).unwrap();

        assert!(matches!(
            workflow.state(),
            WorkflowState::CitizenSelected { .. }
        ));
    }

    #[tokio::test]
    async fn test_select_grain_quotes_exact_product() {
        let mut workflow = started(primed_mock()).await;
        workflow.select_citizen(CARD).await.unwrap();

        let quote = workflow.select_grain(GrainType::Rice).unwrap();

        assert_eq!(quote.computed_quantity(), 20.0);
        assert!(!quote.entitlement_missing());
    }

    #[tokio::test]
    async fn test_select_grain_without_citizen_is_illegal() {
        let mut workflow = started(primed_mock()).await;

        let result = workflow.select_grain(GrainType::Rice);

        assert!(matches!(result, Err(WorkflowError::IllegalState { .. })));
    }

    #[tokio::test]
    async fn test_unconfigured_grain_quotes_zero_with_flag() {
        let mut workflow = started(primed_mock()).await;
        workflow.select_citizen(CARD).await.unwrap();

        let quote = workflow.select_grain(GrainType::Sugar).unwrap();

        assert_eq!(quote.computed_quantity(), 0.0);
        assert!(quote.entitlement_missing());
    }

    #[tokio::test]
    async fn test_request_otp_transitions() {
        let mut mock = primed_mock();
        mock.expect_request_otp()
            .times(1)
            .withf(|operator_id, card| *operator_id == 1 && card.as_str() == CARD)
            .returning(|_, _| Ok(()));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();

        workflow.request_otp().await.unwrap();

        assert!(matches!(
            workflow.state(),
            WorkflowState::OtpRequested { .. }
        ));
        assert_eq!(
            workflow.state().quote().unwrap().computed_quantity(),
            20.0
        );
    }

    #[tokio::test]
    async fn test_otp_dispatch_failure_keeps_state_and_allows_retry() {
        let mut mock = primed_mock();
        let mut seq = Sequence::new();
        mock.expect_request_otp()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(GatewayError::rejected("mail gateway unavailable")));
        mock.expect_request_otp()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();

        let result = workflow.request_otp().await;
        assert!(matches!(result, Err(WorkflowError::Dispatch { .. })));
        assert!(matches!(
            workflow.state(),
            WorkflowState::GrainSelected { .. }
        ));

        workflow.request_otp().await.unwrap();
        assert!(matches!(
            workflow.state(),
            WorkflowState::OtpRequested { .. }
        ));
    }

    #[tokio::test]
    async fn test_request_otp_before_grain_is_illegal() {
        let mut workflow = started(primed_mock()).await;
        workflow.select_citizen(CARD).await.unwrap();

        let result = workflow.request_otp().await;

        assert!(matches!(result, Err(WorkflowError::IllegalState { .. })));
    }

    #[tokio::test]
    async fn test_malformed_otp_never_reaches_backend() {
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));
        mock.expect_distribute().never();

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();
        workflow.request_otp().await.unwrap();

        for bad in ["12345", "1234567", "12345a", ""] {
            let result = workflow.verify_and_commit(bad).await;
            assert!(matches!(result, Err(WorkflowError::Validation { .. })));
            assert!(matches!(
                workflow.state(),
                WorkflowState::OtpRequested { .. }
            ));
        }
    }

    #[tokio::test]
    async fn test_commit_success_scenario() {
        // Family of four, five kilograms per person: twenty committed.
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));
        mock.expect_distribute()
            .times(1)
            .withf(|card, grain, otp| {
                card.as_str() == CARD && *grain == GrainType::Rice && otp.as_str() == "123456"
            })
            .returning(|_, _, _| Ok(make_record(20.0)));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        let quote = workflow.select_grain(GrainType::Rice).unwrap();
        assert_eq!(quote.computed_quantity(), 20.0);

        workflow.request_otp().await.unwrap();
        let record = workflow.verify_and_commit("123456").await.unwrap();

        assert_eq!(record.quantity_given(), 20.0);
        assert_eq!(record.status(), DistributionStatus::Success);
        assert!(workflow.state().is_committed());
        assert_eq!(workflow.record().unwrap().distribution_id(), 501);
    }

    #[tokio::test]
    async fn test_rejected_otp_returns_to_otp_requested() {
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));
        let mut seq = Sequence::new();
        mock.expect_distribute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Err(GatewayError::rejected("Invalid OTP")));
        mock.expect_distribute()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(make_record(20.0)));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();
        workflow.request_otp().await.unwrap();

        let result = workflow.verify_and_commit("000000").await;
        match result {
            Err(WorkflowError::OtpRejected { reason }) => assert_eq!(reason, "Invalid OTP"),
            other => panic!("expected OtpRejected, got {other:?}"),
        }
        assert!(matches!(
            workflow.state(),
            WorkflowState::OtpRequested { .. }
        ));
        assert!(workflow.record().is_none());

        // Backend owns retry limits; the operator may try again.
        let record = workflow.verify_and_commit("123456").await.unwrap();
        assert_eq!(record.quantity_given(), 20.0);
    }

    #[tokio::test]
    async fn test_transport_failure_during_commit_keeps_state() {
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));
        mock.expect_distribute()
            .times(1)
            .returning(|_, _, _| Err(GatewayError::transport("connection refused")));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();
        workflow.request_otp().await.unwrap();

        let result = workflow.verify_and_commit("123456").await;

        assert!(matches!(result, Err(WorkflowError::Transport { .. })));
        assert!(matches!(
            workflow.state(),
            WorkflowState::OtpRequested { .. }
        ));
    }

    #[tokio::test]
    async fn test_session_expiry_is_escalated() {
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));
        mock.expect_distribute()
            .times(1)
            .returning(|_, _, _| Err(GatewayError::Unauthorized));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();
        workflow.request_otp().await.unwrap();

        let result = workflow.verify_and_commit("123456").await;

        assert!(matches!(result, Err(WorkflowError::SessionExpired)));
    }

    #[tokio::test]
    async fn test_committed_run_is_inert() {
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));
        mock.expect_distribute()
            .times(1)
            .returning(|_, _, _| Ok(make_record(20.0)));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();
        workflow.request_otp().await.unwrap();
        workflow.verify_and_commit("123456").await.unwrap();

        assert!(matches!(
            workflow.select_citizen(CARD).await,
            Err(WorkflowError::IllegalState { .. })
        ));
        assert!(matches!(
            workflow.select_grain(GrainType::Rice),
            Err(WorkflowError::IllegalState { .. })
        ));
        assert!(matches!(
            workflow.request_otp().await,
            Err(WorkflowError::IllegalState { .. })
        ));
        assert!(matches!(
            workflow.verify_and_commit("123456").await,
            Err(WorkflowError::IllegalState { .. })
        ));
        assert!(matches!(
            workflow.cancel(),
            Err(WorkflowError::IllegalState { .. })
        ));
    }

    #[tokio::test]
    async fn test_reselection_after_otp_requires_cancel() {
        let mut mock = primed_mock();
        mock.expect_request_otp().times(1).returning(|_, _| Ok(()));

        let mut workflow = started(mock).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();
        workflow.request_otp().await.unwrap();

        assert!(matches!(
            workflow.select_citizen(CARD).await,
            Err(WorkflowError::IllegalState { .. })
        ));

        workflow.cancel().unwrap();
        assert_eq!(workflow.state(), &WorkflowState::Idle);
        workflow.select_citizen(CARD).await.unwrap();
    }

    #[tokio::test]
    async fn test_cancel_discards_run_state() {
        let mut workflow = started(primed_mock()).await;
        workflow.select_citizen(CARD).await.unwrap();
        workflow.select_grain(GrainType::Rice).unwrap();

        workflow.cancel().unwrap();

        assert_eq!(workflow.state(), &WorkflowState::Idle);
        assert!(workflow.state().citizen().is_none());
    }

    #[tokio::test]
    async fn test_refresh_updates_caches() {
        let mut mock = MockShopkeeperPort::new();
        let mut seq = Sequence::new();
        mock.expect_citizens_under_shop()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![make_citizen()]));
        mock.expect_citizens_under_shop()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![make_citizen(), other_citizen()]));
        mock.expect_entitlements()
            .times(2)
            .returning(|| Ok(rice_entitlement()));

        let mut workflow = started(mock).await;
        assert_eq!(workflow.roster().len(), 1);

        workflow.refresh().await.unwrap();

        assert_eq!(workflow.roster().len(), 2);
    }
}
