/// Launch numbers shown in the social-proof strip under the hero.
///
/// Edit these when real numbers exist; the display helpers fall back to
/// honest pre-launch copy while a figure is still zero or unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaunchMetrics {
    pub orders_delivered: u64,
    pub partner_pharmacies: u32,
    pub avg_delivery_mins: Option<u32>,
    pub status_note: String,
}

impl Default for LaunchMetrics {
    fn default() -> Self {
        Self {
            orders_delivered: 0,
            partner_pharmacies: 10,
            avg_delivery_mins: None,
            status_note: "Pre-launch (Noida)".to_string(),
        }
    }
}

impl LaunchMetrics {
    pub fn orders_label(&self) -> String {
        if self.orders_delivered > 0 {
            format!("{}+", group_indian(self.orders_delivered))
        } else {
            "Pre-launch".to_string()
        }
    }

    pub fn partner_pharmacies_label(&self) -> String {
        self.partner_pharmacies.to_string()
    }

    pub fn avg_delivery_label(&self) -> String {
        match self.avg_delivery_mins {
            Some(mins) if mins > 0 => format!("{mins} min"),
            _ => "Target: <30 min".to_string(),
        }
    }
}

/// Digit grouping used by the en-IN locale: the last three digits form one
/// group, every group above that has two digits (`12,34,567`).
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}
