//! Sample data shown when the backend has none

use crate::api::{paths, Ad, AdId, Country, ServerDescriptor};
use crate::remote_list::RemoteList;

/// Servers shown until (or instead of) `GET /vpn/servers`
pub fn sample_servers() -> Vec<ServerDescriptor> {
    vec![
        ServerDescriptor::new("us-east-1", "US East", "1.2.3.4", "online"),
        ServerDescriptor::new("eu-west-1", "EU West", "5.6.7.8", "online"),
        ServerDescriptor::new("asia-south-1", "Asia South", "9.10.11.12", "online"),
    ]
}

/// Ads shown when `GET /ads` fails or is empty
pub fn sample_ads() -> Vec<Ad> {
    vec![
        sample_ad(
            1,
            "Premium VPN Service",
            "Secure your internet connection",
            "https://example.com/vpn",
            "$2.50 CPC",
        ),
        sample_ad(
            2,
            "Cloud Storage Solution",
            "Store your files safely",
            "https://example.com/storage",
            "$1.80 CPC",
        ),
        sample_ad(
            3,
            "Online Security Course",
            "Learn cybersecurity basics",
            "https://example.com/course",
            "$3.20 CPC",
        ),
    ]
}

fn sample_ad(id: i64, title: &str, description: &str, link: &str, payout: &str) -> Ad {
    Ad {
        id: AdId::Num(id),
        title: title.to_string(),
        description: Some(description.to_string()),
        link: link.to_string(),
        payout_rate: Some(payout.to_string()),
    }
}

pub fn server_list() -> RemoteList<ServerDescriptor> {
    RemoteList::new(paths::SERVERS, sample_servers())
}

pub fn ad_list(country: Country) -> RemoteList<Ad> {
    RemoteList::new(paths::ads_for(country.code()), sample_ads())
}
