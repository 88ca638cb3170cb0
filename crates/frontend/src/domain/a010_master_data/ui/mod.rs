//! Master data: small lookup tables with one or two columns each.

use contracts::domain::a010_master_data::aggregate::{
    AdminRole, AdminUser, Brand, Category, ClientType, Location, PaymentTerm, Unit,
};
use contracts::shared::format::or_dash;

use crate::shared::list_page::{Column, ListEntity};

impl ListEntity for Brand {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |b| b.name.clone()),
            Column::new("Code", |b| or_dash(&b.code)),
            Column::new("Description", |b| or_dash(&b.description)),
        ]
    }
}

impl ListEntity for Category {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |c| c.name.clone()),
            Column::new("Code", |c| or_dash(&c.code)),
            Column::new("Description", |c| or_dash(&c.description)),
        ]
    }
}

impl ListEntity for ClientType {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |c| c.name.clone()),
            Column::new("Code", |c| or_dash(&c.code)),
            Column::new("Description", |c| or_dash(&c.description)),
        ]
    }
}

impl ListEntity for Location {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |l| l.name.clone()),
            Column::new("Type", |l| or_dash(&l.location_type)),
            Column::new("Address", |l| or_dash(&l.address)),
        ]
    }
}

impl ListEntity for Unit {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |u| u.name.clone()),
            Column::new("Symbol", |u| or_dash(&u.symbol)),
        ]
    }
}

impl ListEntity for PaymentTerm {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |p| p.name.clone()),
            Column::new("Credit Days", |p| p.days.to_string()),
            Column::new("Description", |p| or_dash(&p.description)),
        ]
    }
}

impl ListEntity for AdminUser {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Username", |u| u.username.clone()),
            Column::new("Full Name", |u| or_dash(&u.full_name)),
            Column::new("Email", |u| or_dash(&u.email)),
            Column::new("Phone", |u| or_dash(&u.phone)),
            Column::new("Role", |u| or_dash(&u.role_name)),
        ]
    }
}

impl ListEntity for AdminRole {
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Name", |r| r.name.clone()),
            Column::new("Permissions", |r| or_dash(&r.permission_list().join(", "))),
            Column::new("Description", |r| or_dash(&r.description)),
        ]
    }
}
