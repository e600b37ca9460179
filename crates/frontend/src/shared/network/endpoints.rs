/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Static endpoint descriptor. Path segments starting with `:` are
/// substituted by [`NetworkManager::with_param`](super::NetworkManager::with_param).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self { method: Method::Get, path }
    }

    pub const fn post(path: &'static str) -> Self {
        Self { method: Method::Post, path }
    }

    pub const fn put(path: &'static str) -> Self {
        Self { method: Method::Put, path }
    }

    pub const fn patch(path: &'static str) -> Self {
        Self { method: Method::Patch, path }
    }

    pub const fn delete(path: &'static str) -> Self {
        Self { method: Method::Delete, path }
    }
}

/// Endpoint registry, grouped by domain
pub mod api {
    use super::Endpoint;

    // ── Recipient sources ─────────────────────────────────────────────────
    pub const FARMERS_LIST: Endpoint = Endpoint::get("/api/farmers");
    pub const FARMERS_CAMPAIGN_HISTORY: Endpoint = Endpoint::post("/api/farmers/campaign-history");
    pub const SALES_CUSTOMERS_LIST: Endpoint = Endpoint::get("/api/sales/customers");
    pub const PUBLIC_LINKS_LIST: Endpoint = Endpoint::get("/api/public-links");
    pub const PUBLIC_LEADS_LIST: Endpoint = Endpoint::get("/api/public-links/leads");

    // ── Saved lists ───────────────────────────────────────────────────────
    pub const FARMER_LISTS_LIST: Endpoint = Endpoint::get("/api/farmer-lists");
    pub const FARMER_LIST_GET: Endpoint = Endpoint::get("/api/farmer-lists/:id");
    pub const FARMER_LIST_CREATE: Endpoint = Endpoint::post("/api/farmer-lists");
    pub const FARMER_LIST_UPDATE: Endpoint = Endpoint::put("/api/farmer-lists/:id");
    pub const FARMER_LIST_DELETE: Endpoint = Endpoint::delete("/api/farmer-lists/:id");
    pub const CONTACT_LISTS_LIST: Endpoint = Endpoint::get("/api/contact-lists");
    pub const CONTACT_LIST_GET: Endpoint = Endpoint::get("/api/contact-lists/:id");
    pub const CONTACT_LIST_CREATE: Endpoint = Endpoint::post("/api/contact-lists");
    pub const CONTACT_LIST_UPDATE: Endpoint = Endpoint::put("/api/contact-lists/:id");
    pub const CONTACT_LIST_DELETE: Endpoint = Endpoint::delete("/api/contact-lists/:id");

    // ── WhatsApp ──────────────────────────────────────────────────────────
    pub const TEMPLATES_LIST: Endpoint = Endpoint::get("/api/whatsapp/templates");
    pub const BROADCASTS_LIST: Endpoint = Endpoint::get("/api/whatsapp/broadcasts");
    pub const BROADCAST_GET: Endpoint = Endpoint::get("/api/whatsapp/broadcasts/:id");
    pub const SEND_TEMPLATE_MESSAGE: Endpoint = Endpoint::post("/api/whatsapp/send-template-message");
    pub const SEND_TEMPLATE_MESSAGES: Endpoint = Endpoint::post("/api/whatsapp/send-template-messages");

    // ── SMS ───────────────────────────────────────────────────────────────
    pub const SMS_SEND: Endpoint = Endpoint::post("/api/exotel/sms");

    // ── Media ─────────────────────────────────────────────────────────────
    pub const MEDIA_UPLOAD: Endpoint = Endpoint::post("/api/media/upload");

    // ── Agri sales orders ─────────────────────────────────────────────────
    pub const AGRI_ORDERS_LIST: Endpoint = Endpoint::get("/api/agri-sales-orders");
    pub const AGRI_ORDER_GET: Endpoint = Endpoint::get("/api/agri-sales-orders/:id");
    pub const AGRI_ORDER_CREATE: Endpoint = Endpoint::post("/api/agri-sales-orders");
    pub const AGRI_ORDER_ACCEPT: Endpoint = Endpoint::patch("/api/agri-sales-orders/:id/accept");
    pub const AGRI_ORDER_REJECT: Endpoint = Endpoint::patch("/api/agri-sales-orders/:id/reject");
    pub const AGRI_ORDER_ADD_PAYMENT: Endpoint = Endpoint::post("/api/agri-sales-orders/:id/payments");
    pub const AGRI_ORDERS_DISPATCH: Endpoint = Endpoint::post("/api/agri-sales-orders/dispatch");
    pub const AGRI_ORDERS_COMPLETE: Endpoint = Endpoint::post("/api/agri-sales-orders/complete");
    pub const AGRI_ORDER_SALES_RETURN: Endpoint = Endpoint::post("/api/agri-sales-orders/:id/sales-return");
    pub const AGRI_OUTSTANDING: Endpoint = Endpoint::get("/api/agri-sales-orders/outstanding");
}
