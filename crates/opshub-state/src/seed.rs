//! Session seed data.
//!
//! Every view starts from these mock records; nothing persists beyond the
//! session.

use opshub_entity::event::{Event, EventStatus};
use opshub_entity::file::{FileKind, StoredFile};
use opshub_entity::priority::Priority;
use opshub_entity::request::{RequestStatus, ResourceRequest};

fn teams(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Seed events for the operations board.
pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: "EV-001".into(),
            title: "Downtown Flooding".to_string(),
            event_type: "Natural Disaster".to_string(),
            status: EventStatus::Active,
            priority: Priority::Critical,
            location: "Downtown, Main Street Area".to_string(),
            start_date: "2024-01-18 06:30:00".to_string(),
            description: "Flooding in downtown area affecting 3 city blocks. Multiple businesses and residences impacted.".to_string(),
            assigned_teams: teams(&["Fire Department", "Police Department", "Public Works"]),
        },
        Event {
            id: "EV-002".into(),
            title: "Highway 101 Traffic Accident".to_string(),
            event_type: "Traffic Incident".to_string(),
            status: EventStatus::Active,
            priority: Priority::High,
            location: "Highway 101, Mile Marker 35".to_string(),
            start_date: "2024-01-20 14:15:00".to_string(),
            description: "Multi-vehicle collision on Highway 101. Two lanes blocked, emergency services on scene.".to_string(),
            assigned_teams: teams(&["Police Department", "Emergency Medical Services"]),
        },
        Event {
            id: "EV-003".into(),
            title: "Community Center Power Outage".to_string(),
            event_type: "Infrastructure".to_string(),
            status: EventStatus::Resolved,
            priority: Priority::Medium,
            location: "Westside Community Center".to_string(),
            start_date: "2024-01-17 10:00:00".to_string(),
            description: "Power outage affecting community center and surrounding buildings. Backup generators activated.".to_string(),
            assigned_teams: teams(&["Utility Company", "Facilities Management"]),
        },
    ]
}

/// Seed files for the library.
pub fn files() -> Vec<StoredFile> {
    vec![
        StoredFile {
            id: "DOC-001".into(),
            name: "Emergency Response Plan 2024.pdf".to_string(),
            kind: FileKind::Pdf,
            size: "2.4 MB".to_string(),
            uploaded_by: "Admin Team".to_string(),
            upload_date: "2024-01-15".to_string(),
            category: "Plans & Procedures".to_string(),
            tags: teams(&["emergency", "response", "protocol"]),
        },
        StoredFile {
            id: "DOC-002".into(),
            name: "Evacuation Routes Map.jpg".to_string(),
            kind: FileKind::Image,
            size: "1.8 MB".to_string(),
            uploaded_by: "Planning Team".to_string(),
            upload_date: "2024-01-18".to_string(),
            category: "Maps".to_string(),
            tags: teams(&["evacuation", "routes", "map"]),
        },
        StoredFile {
            id: "DOC-003".into(),
            name: "Incident Report Template.docx".to_string(),
            kind: FileKind::Document,
            size: "156 KB".to_string(),
            uploaded_by: "Operations".to_string(),
            upload_date: "2024-01-19".to_string(),
            category: "Templates".to_string(),
            tags: teams(&["incident", "report", "template"]),
        },
    ]
}

/// Seed resource requests for the read-only log.
pub fn requests() -> Vec<ResourceRequest> {
    vec![
        ResourceRequest {
            id: "RR-001".into(),
            request_type: "Emergency Supplies".to_string(),
            status: RequestStatus::Pending,
            priority: Priority::High,
            requested_by: "John Smith".to_string(),
            department: "Fire Department".to_string(),
            date_requested: "2024-01-20 08:30:00".to_string(),
            items: teams(&[
                "Water bottles (100 cases)",
                "Emergency blankets (50)",
                "First aid kits (20)",
            ]),
            notes: "Needed for evacuation center setup".to_string(),
        },
        ResourceRequest {
            id: "RR-002".into(),
            request_type: "Personnel".to_string(),
            status: RequestStatus::Approved,
            priority: Priority::Critical,
            requested_by: "Sarah Johnson".to_string(),
            department: "Police Department".to_string(),
            date_requested: "2024-01-19 15:45:00".to_string(),
            items: teams(&[
                "Emergency response team (5 members)",
                "K-9 unit (2 teams)",
            ]),
            notes: "Required for search and rescue operation".to_string(),
        },
    ]
}
