//! Sample back-office data for the demo

use partsmart::prelude::*;
use serde_json::{Value, json};

fn records(value: Value) -> Result<Vec<Record>> {
    Ok(serde_json::from_value(value)?)
}

pub fn dealers() -> Result<Vec<Record>> {
    records(json!([
        {"id": "DLR-001", "name": "Torque Depot", "email": "sales@torquedepot.com", "location": "Austin, TX", "region": "South", "tier": "Gold", "status": "Active", "rating": 4.8, "products": 342, "joined": "2022-03-14"},
        {"id": "DLR-002", "name": "Brake Barn", "email": "hello@brakebarn.com", "location": "Denver, CO", "region": "West", "tier": "Silver", "status": "Pending", "rating": 4.1, "products": 57, "joined": "2024-01-09"},
        {"id": "DLR-003", "name": "Apex Auto Parts", "email": "contact@apexauto.com", "location": "Columbus, OH", "region": "Midwest", "tier": "Platinum", "status": "Active", "rating": 4.9, "products": 1204, "joined": "2020-07-22"},
        {"id": "DLR-004", "name": "Gearhead Supply", "email": "info@gearhead.io", "location": "Portland, OR", "region": "West", "tier": "Bronze", "status": "Suspended", "rating": 3.2, "products": 88, "joined": "2023-05-30"},
        {"id": "DLR-005", "name": "Midway Motors", "email": "parts@midwaymotors.com", "location": "Chicago, IL", "region": "Midwest", "tier": "Gold", "status": "Active", "rating": 4.5, "products": 615, "joined": "2021-11-02"},
        {"id": "DLR-006", "name": "Coastal Clutch Co", "email": "orders@coastalclutch.com", "location": "Tampa, FL", "region": "South", "tier": "Silver", "status": "Active", "rating": 4.3, "products": 204, "joined": "2022-08-19"},
        {"id": "DLR-007", "name": "Northern Pistons", "email": "team@northernpistons.ca", "location": "Buffalo, NY", "region": "Northeast", "tier": "Bronze", "status": "Inactive", "rating": 3.9, "products": 41, "joined": "2023-02-11"},
        {"id": "DLR-008", "name": "Bolt & Bearing", "email": "support@boltbearing.com", "location": "Phoenix, AZ", "region": "West", "tier": "Gold", "status": "Active", "rating": 4.6, "products": 498, "joined": "2021-04-05"},
        {"id": "DLR-009", "name": "Redline Racing", "email": "race@redline.com", "location": "Charlotte, NC", "region": "South", "tier": "Platinum", "status": "Active", "rating": 4.7, "products": 877, "joined": "2020-12-01"},
        {"id": "DLR-010", "name": "Summit Spares", "email": "hi@summitspares.com", "location": "Salt Lake City, UT", "region": "West", "tier": "Bronze", "status": "Pending", "rating": null, "products": 0, "joined": "2024-06-17"},
        {"id": "DLR-011", "name": "Valley Volt", "email": "ev@valleyvolt.com", "location": "Fresno, CA", "region": "West", "tier": "Silver", "status": "Active", "rating": 4.2, "products": 133, "joined": "2023-09-08"},
        {"id": "DLR-012", "name": "Ironworks Exhaust", "email": "shop@ironworks.com", "location": "Detroit, MI", "region": "Midwest", "tier": "Silver", "status": "Suspended", "rating": 2.8, "products": 64, "joined": "2022-10-27"}
    ]))
}

pub fn products() -> Result<Vec<Record>> {
    records(json!([
        {"id": "PRD-101", "name": "Ceramic Brake Pads", "sku": "BRK-CER-01", "brand": "Brembo", "category": "Brakes", "dealer_id": "DLR-003", "price": 89.99, "stock": 140, "status": "Active", "created_at": "2024-02-01T09:30:00Z"},
        {"id": "PRD-102", "name": "Oil Filter", "sku": "ENG-OF-22", "brand": "Bosch", "category": "Engine", "dealer_id": "DLR-001", "price": 12.49, "stock": 980, "status": "Active", "created_at": "2023-11-15T14:00:00Z"},
        {"id": "PRD-103", "name": "Spark Plug Set", "sku": "ENG-SP-04", "brand": "NGK", "category": "Engine", "dealer_id": "DLR-005", "price": 34.0, "stock": 0, "status": "Out of Stock", "created_at": "2024-01-20T08:15:00Z"},
        {"id": "PRD-104", "name": "Coilover Kit", "sku": "SUS-CO-10", "brand": "KW", "category": "Suspension", "dealer_id": "DLR-009", "price": 1899.0, "stock": 6, "status": "Active", "created_at": "2024-03-05T16:45:00Z"},
        {"id": "PRD-105", "name": "LED Headlight Bulbs", "sku": "ELE-HL-07", "brand": "Philips", "category": "Electrical", "dealer_id": "DLR-011", "price": 59.95, "stock": 320, "status": "Active", "created_at": "2023-08-09T11:20:00Z"},
        {"id": "PRD-106", "name": "Performance Air Intake", "sku": "ENG-AI-15", "brand": "K&N", "category": "Engine", "dealer_id": "DLR-009", "price": 329.5, "stock": 24, "status": "Draft", "created_at": "2024-04-12T10:00:00Z"},
        {"id": "PRD-107", "name": "Slotted Rotors", "sku": "BRK-ROT-03", "brand": "Brembo", "category": "Brakes", "dealer_id": "DLR-008", "price": 219.0, "stock": 45, "status": "Active", "created_at": "2023-12-28T13:10:00Z"},
        {"id": "PRD-108", "name": "Alternator", "sku": "ELE-ALT-02", "brand": "Denso", "category": "Electrical", "dealer_id": "DLR-005", "price": 245.75, "stock": 12, "status": "Active", "created_at": "2024-02-18T15:35:00Z"}
    ]))
}

pub fn orders() -> Result<Vec<Record>> {
    records(json!([
        {"id": "ORD-5001", "customer": "Maria Lopez", "email": "maria@example.com", "dealer_id": "DLR-003", "total": 179.98, "status": "Delivered", "payment_status": "Paid", "date": "2024-04-02"},
        {"id": "ORD-5002", "customer": "James Chen", "email": "jchen@example.com", "dealer_id": "DLR-009", "total": 1899.0, "status": "Shipped", "payment_status": "Paid", "date": "2024-04-05"},
        {"id": "ORD-5003", "customer": "Aisha Khan", "email": "aisha@example.com", "dealer_id": "DLR-001", "total": 37.47, "status": "Processing", "payment_status": "Pending", "date": "2024-04-07"},
        {"id": "ORD-5004", "customer": "Tom Becker", "email": "tbecker@example.com", "dealer_id": "DLR-005", "total": 245.75, "status": "Cancelled", "payment_status": "Refunded", "date": "2024-03-29"},
        {"id": "ORD-5005", "customer": "Priya Nair", "email": "priya@example.com", "dealer_id": "DLR-011", "total": 119.9, "status": "Delivered", "payment_status": "Paid", "date": "2024-03-18"},
        {"id": "ORD-5006", "customer": "Lucas Silva", "email": "lucas@example.com", "dealer_id": "DLR-008", "total": 438.0, "status": "Processing", "payment_status": "Paid", "date": "2024-04-08"},
        {"id": "ORD-5007", "customer": "Emma Wright", "email": "emma@example.com", "dealer_id": "DLR-009", "total": 329.5, "status": "Pending", "payment_status": "Failed", "date": "2024-04-09"},
        {"id": "ORD-5008", "customer": "Noah Kim", "email": "noah@example.com", "dealer_id": "DLR-003", "total": 89.99, "status": "Shipped", "payment_status": "Paid", "date": "2024-04-06"}
    ]))
}

pub fn tickets() -> Result<Vec<Record>> {
    records(json!([
        {"id": "TCK-301", "subject": "Wrong brake pads delivered", "customer": "Maria Lopez", "category": "Order", "priority": "High", "status": "Open", "created_at": "2024-04-03T10:12:00Z"},
        {"id": "TCK-302", "subject": "Refund not received", "customer": "Tom Becker", "category": "Billing", "priority": "Urgent", "status": "In Progress", "created_at": "2024-04-01T08:40:00Z"},
        {"id": "TCK-303", "subject": "Fitment question for coilovers", "customer": "James Chen", "category": "Product", "priority": "Low", "status": "Resolved", "created_at": "2024-03-30T17:05:00Z"},
        {"id": "TCK-304", "subject": "Dealer payout delayed", "customer": "Redline Racing", "category": "Billing", "priority": "Medium", "status": "Open", "created_at": "2024-04-08T12:00:00Z"},
        {"id": "TCK-305", "subject": "Cannot update inventory CSV", "customer": "Midway Motors", "category": "Technical", "priority": "High", "status": "In Progress", "created_at": "2024-04-06T09:25:00Z"},
        {"id": "TCK-306", "subject": "Account locked", "customer": "Aisha Khan", "category": "Account", "priority": "Medium", "status": "Closed", "created_at": "2024-03-22T14:50:00Z"}
    ]))
}

pub fn users() -> Result<Vec<Record>> {
    records(json!([
        {"id": "USR-01", "name": "Maria Lopez", "email": "maria@example.com", "role": "Buyer", "status": "Active", "orders": 14, "joined": "2022-06-01"},
        {"id": "USR-02", "name": "James Chen", "email": "jchen@example.com", "role": "Buyer", "status": "Active", "orders": 3, "joined": "2023-10-12"},
        {"id": "USR-03", "name": "Dana Ortiz", "email": "dana@torquedepot.com", "role": "Dealer", "status": "Active", "orders": 0, "joined": "2022-03-14"},
        {"id": "USR-04", "name": "Tom Becker", "email": "tbecker@example.com", "role": "Buyer", "status": "Banned", "orders": 7, "joined": "2021-01-30"},
        {"id": "USR-05", "name": "Sam Patel", "email": "sam@partsmart.io", "role": "Admin", "status": "Active", "orders": 0, "joined": "2020-05-18"},
        {"id": "USR-06", "name": "Lucas Silva", "email": "lucas@example.com", "role": "Buyer", "status": "Inactive", "orders": 1, "joined": "2024-02-27"}
    ]))
}

pub fn inventory() -> Result<Vec<Record>> {
    records(json!([
        {"id": "INV-01", "sku": "BRK-CER-01", "name": "Ceramic Brake Pads", "category": "Brakes", "warehouse": "Columbus", "quantity": 140, "price": 89.99, "status": "In Stock", "updated_at": "2024-04-08T06:00:00Z"},
        {"id": "INV-02", "sku": "ENG-SP-04", "name": "Spark Plug Set", "category": "Engine", "warehouse": "Chicago", "quantity": 0, "price": 34.0, "status": "Out of Stock", "updated_at": "2024-04-07T06:00:00Z"},
        {"id": "INV-03", "sku": "SUS-CO-10", "name": "Coilover Kit", "category": "Suspension", "warehouse": "Charlotte", "quantity": 6, "price": 1899.0, "status": "Low Stock", "updated_at": "2024-04-08T06:00:00Z"},
        {"id": "INV-04", "sku": "ENG-OF-22", "name": "Oil Filter", "category": "Engine", "warehouse": "Austin", "quantity": 980, "price": 12.49, "status": "In Stock", "updated_at": "2024-04-05T06:00:00Z"},
        {"id": "INV-05", "sku": "ELE-ALT-02", "name": "Alternator", "category": "Electrical", "warehouse": "Chicago", "quantity": 12, "price": 245.75, "status": "Low Stock", "updated_at": "2024-04-06T06:00:00Z"},
        {"id": "INV-06", "sku": "BRK-ROT-03", "name": "Slotted Rotors", "category": "Brakes", "warehouse": "Phoenix", "quantity": 45, "price": 219.0, "status": "In Stock", "updated_at": "2024-04-04T06:00:00Z"}
    ]))
}

/// In-memory source holding every demo table
pub fn source() -> Result<InMemoryRecordSource> {
    Ok(InMemoryRecordSource::new()
        .with_table("dealers", dealers()?)
        .with_table("products", products()?)
        .with_table("orders", orders()?)
        .with_table("tickets", tickets()?)
        .with_table("users", users()?)
        .with_table("inventory", inventory()?))
}
