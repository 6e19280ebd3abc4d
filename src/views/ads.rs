//! Ads Widget
//!
//! Country-targeted sponsored cards with impression and click analytics.

use crate::api::{Ad, AdEvent, AdEventKind, ApiClient, Country};
use crate::fixtures;
use crate::remote_list::ListSource;

use super::cell::ViewCell;
use super::shell::Shell;

pub const LOADING_ADS: &str = "Loading ads...";
pub const NO_ADS: &str = "No ads available";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdsState {
    pub country: Country,
    pub ads: Vec<Ad>,
    pub source: ListSource,
    pub loading: bool,
}

impl AdsState {
    /// Text shown in place of the cards, if any
    pub fn placeholder(&self) -> Option<&'static str> {
        if self.loading {
            Some(LOADING_ADS)
        } else if self.ads.is_empty() {
            Some(NO_ADS)
        } else {
            None
        }
    }
}

/// Fetch ads for the selected country.
///
/// The result is dropped if the selection moved on while the request was
/// in flight.
pub async fn load_ads(api: &ApiClient, view: &impl ViewCell<AdsState>) {
    let Some(country) = view.with(|s| s.country) else {
        return;
    };
    view.update(|s| s.loading = true);

    let listing = fixtures::ad_list(country).load(api).await;

    view.update(|s| {
        if s.country != country {
            tracing::debug!("Discarding ads for {}, now showing {}", country, s.country);
            return;
        }
        s.ads = listing.items;
        s.source = listing.source;
        s.loading = false;
    });
}

/// Switch country and refetch; a no-op if it is already selected
pub async fn select_country(api: &ApiClient, view: &impl ViewCell<AdsState>, country: Country) {
    if view.with(|s| s.country == country) != Some(false) {
        return;
    }
    view.update(|s| s.country = country);
    load_ads(api, view).await;
}

/// `POST /ads/event`; failures are only logged
pub async fn record_event(api: &ApiClient, event: &AdEvent) {
    if let Err(e) = api.ad_event(event).await {
        tracing::debug!(
            "Dropped {:?} event for ad {}: {}",
            event.event_type,
            event.metadata.ad_id,
            e
        );
    }
}

/// Pointer entered a card
pub fn impression(api: &ApiClient, shell: &dyn Shell, ad: &Ad, country: Country) {
    fire(api, shell, AdEvent::new(AdEventKind::Impression, ad, country));
}

/// Card clicked: record it and open the link
pub fn click(api: &ApiClient, shell: &dyn Shell, ad: &Ad, country: Country) {
    fire(api, shell, AdEvent::new(AdEventKind::Click, ad, country));
    shell.open_in_new_tab(&ad.link);
}

fn fire(api: &ApiClient, shell: &dyn Shell, event: AdEvent) {
    let api = api.clone();
    shell.detach(Box::pin(async move {
        record_event(&api, &event).await;
    }));
}
