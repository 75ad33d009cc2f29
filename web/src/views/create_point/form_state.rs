//! View-state for the collection point form, kept free of DOM and reactive
//! types so it can be unit tested.

use std::fmt::Display;

use shared_types::{LatLong, NewPoint};
use thiserror::Error;

/// Placeholder value of the UF and city selects.
pub const UNSET: &str = "0";

/// How long the confirmation overlay stays up before returning home.
pub const OVERLAY_DURATION_MS: u64 = 3500;

pub fn is_unset(value: &str) -> bool {
    value.is_empty() || value == UNSET
}

/// Ids of the catalog items picked by the user, in click order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemSelection {
    ids: Vec<i32>,
}

impl ItemSelection {
    pub fn toggle(&mut self, id: i32) {
        match self.ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.ids.remove(index);
            }
            None => self.ids.push(id),
        }
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Handle for one in-flight city list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityTicket {
    seq: u64,
    uf: String,
}

impl CityTicket {
    pub fn uf(&self) -> &str {
        &self.uf
    }
}

/// Hands out sequence numbers so only the newest city response is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityRequests {
    latest: u64,
}

impl CityRequests {
    /// Invalidates every earlier ticket. Returns `None` for the sentinel,
    /// meaning no request should be made.
    pub fn begin(&mut self, uf: &str) -> Option<CityTicket> {
        self.latest += 1;
        if is_unset(uf) {
            return None;
        }
        Some(CityTicket {
            seq: self.latest,
            uf: uf.to_string(),
        })
    }

    pub fn accepts(&self, ticket: &CityTicket) -> bool {
        ticket.seq == self.latest
    }
}

/// Cascading UF -> city selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CityPicker {
    pub selected_uf: String,
    pub selected_city: String,
    pub cities: Vec<String>,
    requests: CityRequests,
}

impl Default for CityPicker {
    fn default() -> Self {
        Self {
            selected_uf: UNSET.to_string(),
            selected_city: UNSET.to_string(),
            cities: Vec::new(),
            requests: CityRequests::default(),
        }
    }
}

impl CityPicker {
    /// Records the new UF and resets the city. The returned ticket, if any,
    /// is the one city fetch to perform.
    pub fn select_uf(&mut self, uf: &str) -> Option<CityTicket> {
        self.selected_uf = uf.to_string();
        self.selected_city = UNSET.to_string();
        self.cities.clear();
        self.requests.begin(uf)
    }

    pub fn select_city(&mut self, city: &str) {
        self.selected_city = city.to_string();
    }

    /// Stores a city list unless a newer request has been issued since.
    pub fn apply_cities(&mut self, ticket: &CityTicket, cities: Vec<String>) -> bool {
        if !self.requests.accepts(ticket) {
            return false;
        }
        self.cities = cities;
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

impl OverlayState {
    pub fn open(&mut self) {
        *self = OverlayState::Open;
    }

    pub fn close(&mut self) {
        *self = OverlayState::Closed;
    }

    pub fn is_open(self) -> bool {
        self == OverlayState::Open
    }
}

/// Position chosen on the map. Each click replaces the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PositionPicker {
    selected: LatLong,
}

impl PositionPicker {
    pub fn click(&mut self, lat: f64, lng: f64) {
        self.selected = LatLong { lat, long: lng };
    }

    pub fn position(&self) -> LatLong {
        self.selected
    }
}

/// Lets one submission through at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Returns `false` while an earlier submission has not settled.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Failed(String),
}

impl SubmitOutcome {
    pub fn from_result<E: Display>(result: &Result<(), E>) -> Self {
        match result {
            Ok(()) => SubmitOutcome::Created,
            Err(e) => SubmitOutcome::Failed(format!("Não foi possível cadastrar o ponto: {}", e)),
        }
    }

    /// Only a confirmed creation opens the confirmation overlay.
    pub fn overlay(&self) -> OverlayState {
        match self {
            SubmitOutcome::Created => OverlayState::Open,
            SubmitOutcome::Failed(_) => OverlayState::Closed,
        }
    }

    pub fn apply_to(&self, overlay: &mut OverlayState) {
        match self.overlay() {
            OverlayState::Open => overlay.open(),
            OverlayState::Closed => overlay.close(),
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            SubmitOutcome::Created => None,
            SubmitOutcome::Failed(message) => Some(message.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Selecione uma UF")]
    MissingUf,
    #[error("Selecione uma cidade")]
    MissingCity,
}

/// Everything the user entered, snapshotted at submit time.
#[derive(Debug, Clone, PartialEq)]
pub struct PointForm {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub position: LatLong,
    pub items: ItemSelection,
}

impl PointForm {
    pub fn to_payload(&self) -> Result<NewPoint, FormError> {
        if is_unset(&self.uf) {
            return Err(FormError::MissingUf);
        }
        if is_unset(&self.city) {
            return Err(FormError::MissingCity);
        }

        Ok(NewPoint {
            name: self.name.clone(),
            email: self.email.clone(),
            whatsapp: self.whatsapp.clone(),
            uf: self.uf.clone(),
            city: self.city.clone(),
            latitude: self.position.lat,
            longitude: self.position.long,
            items: self.items.ids().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn filled_form() -> PointForm {
        let mut items = ItemSelection::default();
        items.toggle(2);
        items.toggle(5);
        PointForm {
            name: "Cooperativa Recicla".to_string(),
            email: "contato@recicla.org".to_string(),
            whatsapp: "21988887777".to_string(),
            uf: "RJ".to_string(),
            city: "Niterói".to_string(),
            position: LatLong {
                lat: -22.8832,
                long: -43.1034,
            },
            items,
        }
    }

    #[test]
    fn clicking_same_item_twice_restores_selection() {
        let mut selection = ItemSelection::default();
        selection.toggle(3);
        assert!(selection.contains(3));
        selection.toggle(3);
        assert!(selection.is_empty());
    }

    #[test]
    fn selection_holds_ids_clicked_an_odd_number_of_times() {
        let clicks = [1, 4, 1, 7, 4, 4, 9, 1, 7, 7, 7, 2];
        let mut selection = ItemSelection::default();
        let mut counts: HashMap<i32, usize> = HashMap::new();

        for id in clicks {
            selection.toggle(id);
            *counts.entry(id).or_default() += 1;

            let mut seen = selection.ids().to_vec();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), selection.ids().len(), "duplicate id after clicking {id}");
        }

        let mut expected: Vec<i32> = counts
            .into_iter()
            .filter(|(_, n)| n % 2 == 1)
            .map(|(id, _)| id)
            .collect();
        expected.sort_unstable();
        let mut actual = selection.ids().to_vec();
        actual.sort_unstable();

        assert_eq!(actual, expected);
        assert_eq!(actual, vec![1, 2, 4, 9]);
    }

    #[test]
    fn selection_keeps_click_order() {
        let mut selection = ItemSelection::default();
        for id in [6, 2, 8, 2, 3] {
            selection.toggle(id);
        }
        assert_eq!(selection.ids(), &[6, 8, 3]);
    }

    #[test]
    fn sentinel_uf_never_requests_cities() {
        let mut picker = CityPicker::default();
        assert!(picker.select_uf(UNSET).is_none());
        assert!(picker.select_uf("").is_none());
    }

    #[test]
    fn real_uf_requests_cities_once_for_that_code() {
        let mut picker = CityPicker::default();
        let tickets: Vec<CityTicket> = ["SP"].iter().filter_map(|uf| picker.select_uf(uf)).collect();

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].uf(), "SP");
    }

    #[test]
    fn changing_uf_resets_city_and_list() {
        let mut picker = CityPicker::default();
        let sp = picker.select_uf("SP").unwrap();
        assert!(picker.apply_cities(&sp, vec!["Campinas".into(), "Santos".into()]));
        picker.select_city("Santos");

        picker.select_uf("RJ");

        assert_eq!(picker.selected_uf, "RJ");
        assert_eq!(picker.selected_city, UNSET);
        assert!(picker.cities.is_empty());
    }

    // A slow "SP" response arriving after the "RJ" request must not win.
    #[test]
    fn late_response_for_previous_uf_is_discarded() {
        let mut picker = CityPicker::default();
        let sp = picker.select_uf("SP").unwrap();
        let rj = picker.select_uf("RJ").unwrap();

        assert!(picker.apply_cities(&rj, vec!["Niterói".into(), "Petrópolis".into()]));
        assert!(!picker.apply_cities(&sp, vec!["Campinas".into()]));

        assert_eq!(picker.cities, vec!["Niterói".to_string(), "Petrópolis".to_string()]);
    }

    #[test]
    fn resetting_to_sentinel_invalidates_in_flight_request() {
        let mut picker = CityPicker::default();
        let sp = picker.select_uf("SP").unwrap();
        assert!(picker.select_uf(UNSET).is_none());

        assert!(!picker.apply_cities(&sp, vec!["Campinas".into()]));
        assert!(picker.cities.is_empty());
    }

    #[test]
    fn payload_carries_every_field() {
        let payload = filled_form().to_payload().unwrap();

        assert_eq!(payload.name, "Cooperativa Recicla");
        assert_eq!(payload.email, "contato@recicla.org");
        assert_eq!(payload.whatsapp, "21988887777");
        assert_eq!(payload.uf, "RJ");
        assert_eq!(payload.city, "Niterói");
        assert_eq!(payload.items, vec![2, 5]);
    }

    #[test]
    fn second_map_click_replaces_the_first() {
        let mut picker = PositionPicker::default();
        picker.click(1.5, 2.5);
        picker.click(-23.550520, -46.633308);

        assert_eq!(
            picker.position(),
            LatLong {
                lat: -23.550520,
                long: -46.633308
            }
        );

        let mut form = filled_form();
        form.position = picker.position();
        let payload = form.to_payload().unwrap();

        assert_eq!(payload.latitude, -23.550520);
        assert_eq!(payload.longitude, -46.633308);
    }

    #[test]
    fn submit_guard_rejects_second_submit_until_settled() {
        let mut guard = SubmitGuard::default();

        assert!(guard.try_begin());
        assert!(guard.is_pending());
        assert!(!guard.try_begin(), "second submit must wait for the first");

        guard.finish();

        assert!(!guard.is_pending());
        assert!(guard.try_begin());
    }

    #[test]
    fn overlay_opens_on_creation_and_closes_on_timer() {
        let mut overlay = OverlayState::default();
        assert_eq!(overlay, OverlayState::Closed);

        SubmitOutcome::Created.apply_to(&mut overlay);
        assert!(overlay.is_open());

        // What the auto-close timer does.
        overlay.close();
        assert_eq!(overlay, OverlayState::Closed);
    }

    #[test]
    fn failed_outcome_leaves_closed_overlay_closed() {
        let mut overlay = OverlayState::Closed;
        SubmitOutcome::Failed("timeout".to_string()).apply_to(&mut overlay);
        assert_eq!(overlay, OverlayState::Closed);
    }

    #[test]
    fn unset_uf_or_city_blocks_payload() {
        let mut form = filled_form();
        form.city = UNSET.to_string();
        assert_eq!(form.to_payload(), Err(FormError::MissingCity));

        form.uf = UNSET.to_string();
        assert_eq!(form.to_payload(), Err(FormError::MissingUf));
    }

    #[test]
    fn created_point_opens_overlay() {
        let outcome = SubmitOutcome::from_result::<String>(&Ok(()));
        assert_eq!(outcome.overlay(), OverlayState::Open);
        assert_eq!(outcome.error_message(), None);
    }

    // Historically the overlay opened even when the backend rejected the
    // point. A failed submission now keeps it closed and reports the error.
    #[test]
    fn failed_submission_keeps_overlay_closed() {
        let outcome = SubmitOutcome::from_result(&Err("connection refused"));

        assert_eq!(outcome.overlay(), OverlayState::Closed);
        assert!(!outcome.overlay().is_open());
        assert!(outcome
            .error_message()
            .is_some_and(|m| m.contains("connection refused")));
    }
}
