//! Layouts for every Close record kind.

use super::layout::{Cell, Field, Item, Layout, Piece, Section, SectionBody};

pub static LEAD: Layout = Layout {
    heading: None,
    plural: "leads",
    items: &[
        Item::Field(Field {
            label: "Lead ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Company Name",
            cell: Cell::Text {
                path: &["display_name"],
                or: "No company name",
            },
        }),
        Item::Field(Field {
            label: "Status",
            cell: Cell::Text {
                path: &["status_label"],
                or: "No status",
            },
        }),
        Item::Field(Field {
            label: "URL",
            cell: Cell::Text {
                path: &["url"],
                or: "No URL",
            },
        }),
        Item::Field(Field {
            label: "Description",
            cell: Cell::Text {
                path: &["description"],
                or: "No description",
            },
        }),
        Item::Field(Field {
            label: "Created",
            cell: Cell::Timestamp {
                path: &["date_created"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Updated",
            cell: Cell::Timestamp {
                path: &["date_updated"],
                or: "Unknown",
            },
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Contacts",
            path: &["contacts"],
            body: SectionBody::Bullets {
                head: &[
                    Piece::Cell(Cell::Text {
                        path: &["name"],
                        or: "No name",
                    }),
                    Piece::Lit(" ("),
                    Piece::Cell(Cell::Text {
                        path: &["title"],
                        or: "No title",
                    }),
                    Piece::Lit(")"),
                ],
                details: &[
                    Field {
                        label: "Emails",
                        cell: Cell::Join {
                            path: &["emails"],
                            item: &[Piece::Cell(Cell::Text {
                                path: &["email"],
                                or: "No email",
                            })],
                            sep: ", ",
                            or: "No emails",
                        },
                    },
                    Field {
                        label: "Phones",
                        cell: Cell::Join {
                            path: &["phones"],
                            item: &[
                                Piece::Cell(Cell::Text {
                                    path: &["phone"],
                                    or: "No phone",
                                }),
                                Piece::Lit(" ("),
                                Piece::Cell(Cell::Text {
                                    path: &["type"],
                                    or: "unknown",
                                }),
                                Piece::Lit(")"),
                            ],
                            sep: ", ",
                            or: "No phones",
                        },
                    },
                ],
                separator: "\n\n",
            },
            empty: "No contacts",
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Addresses",
            path: &["addresses"],
            body: SectionBody::Bullets {
                head: &[
                    Piece::Cell(Cell::Text {
                        path: &["address_1"],
                        or: "",
                    }),
                    Piece::Lit(" "),
                    Piece::Cell(Cell::Text {
                        path: &["address_2"],
                        or: "",
                    }),
                    Piece::Lit(", "),
                    Piece::Cell(Cell::Text {
                        path: &["city"],
                        or: "",
                    }),
                    Piece::Lit(", "),
                    Piece::Cell(Cell::Text {
                        path: &["state"],
                        or: "",
                    }),
                    Piece::Lit(" "),
                    Piece::Cell(Cell::Text {
                        path: &["zipcode"],
                        or: "",
                    }),
                    Piece::Lit(", "),
                    Piece::Cell(Cell::Text {
                        path: &["country"],
                        or: "",
                    }),
                ],
                details: &[],
                separator: "\n",
            },
            empty: "No addresses",
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Custom Fields",
            path: &["custom"],
            body: SectionBody::Entries,
            empty: "No custom fields",
        }),
    ],
    aggregates: &[],
};

pub static CONTACT: Layout = Layout {
    heading: None,
    plural: "contacts",
    items: &[
        Item::Field(Field {
            label: "Contact ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Name",
            cell: Cell::Text {
                path: &["name"],
                or: "No name",
            },
        }),
        Item::Field(Field {
            label: "Title",
            cell: Cell::Text {
                path: &["title"],
                or: "No title",
            },
        }),
        Item::Field(Field {
            label: "Lead ID",
            cell: Cell::Text {
                path: &["lead_id"],
                or: "No lead",
            },
        }),
        Item::Field(Field {
            label: "Created",
            cell: Cell::Timestamp {
                path: &["date_created"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Updated",
            cell: Cell::Timestamp {
                path: &["date_updated"],
                or: "Unknown",
            },
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Emails",
            path: &["emails"],
            body: SectionBody::Bullets {
                head: &[
                    Piece::Cell(Cell::Text {
                        path: &["email"],
                        or: "No email",
                    }),
                    Piece::Lit(" ("),
                    Piece::Cell(Cell::Text {
                        path: &["type"],
                        or: "unknown",
                    }),
                    Piece::Lit(")"),
                ],
                details: &[],
                separator: "\n",
            },
            empty: "No emails",
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Phones",
            path: &["phones"],
            body: SectionBody::Bullets {
                head: &[
                    Piece::Cell(Cell::Text {
                        path: &["phone"],
                        or: "No phone",
                    }),
                    Piece::Lit(" ("),
                    Piece::Cell(Cell::Text {
                        path: &["type"],
                        or: "unknown",
                    }),
                    Piece::Lit(")"),
                ],
                details: &[],
                separator: "\n",
            },
            empty: "No phones",
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Related Leads",
            path: &["leads"],
            body: SectionBody::Bullets {
                head: &[Piece::Cell(Cell::FirstOf {
                    paths: &[&["display_name"], &["name"]],
                    or: "Unknown lead",
                })],
                details: &[],
                separator: "\n",
            },
            empty: "No related leads",
        }),
        Item::Blank,
        Item::Section(Section {
            title: "Custom Fields",
            path: &["custom"],
            body: SectionBody::Entries,
            empty: "No custom fields",
        }),
    ],
    aggregates: &[],
};

pub static EMAIL_ACTIVITY: Layout = Layout {
    heading: Some("Email Activity:"),
    plural: "email activities",
    items: &[
        Item::Field(Field {
            label: "ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Lead ID",
            cell: Cell::Text {
                path: &["lead_id"],
                or: "No lead",
            },
        }),
        Item::Field(Field {
            label: "Subject",
            cell: Cell::Text {
                path: &["subject"],
                or: "No subject",
            },
        }),
        Item::Field(Field {
            label: "Status",
            cell: Cell::Text {
                path: &["status"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Direction",
            cell: Cell::Text {
                path: &["direction"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "From",
            cell: Cell::FirstOf {
                paths: &[&["sender"], &["user", "email"]],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "To",
            cell: Cell::JoinFirst {
                paths: &[&["to"], &["contacts"]],
                item: &[Piece::Cell(Cell::FirstOf {
                    paths: &[&["email"], &[]],
                    or: "Unknown",
                })],
                sep: ", ",
                or: "No recipients",
            },
        }),
        Item::Field(Field {
            label: "Date",
            cell: Cell::Timestamp {
                path: &["date_created"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Scheduled",
            cell: Cell::Timestamp {
                path: &["date_scheduled"],
                or: "Not scheduled",
            },
        }),
        Item::Field(Field {
            label: "Body",
            cell: Cell::FirstOf {
                paths: &[&["body_text"], &["body_html"]],
                or: "No body content",
            },
        }),
        Item::Field(Field {
            label: "Attachments",
            cell: Cell::Join {
                path: &["attachments"],
                item: &[Piece::Cell(Cell::Text {
                    path: &["filename"],
                    or: "Unnamed attachment",
                })],
                sep: ", ",
                or: "No attachments",
            },
        }),
        Item::Field(Field {
            label: "Follow-up Date",
            cell: Cell::Timestamp {
                path: &["followup_date"],
                or: "None",
            },
        }),
    ],
    aggregates: &[],
};

pub static TASK: Layout = Layout {
    heading: Some("Task:"),
    plural: "tasks",
    items: &[
        Item::Field(Field {
            label: "ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Type",
            cell: Cell::Text {
                path: &["_type"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Status",
            cell: Cell::Flag {
                path: &["is_complete"],
                yes: "Completed",
                no: "Incomplete",
            },
        }),
        Item::Field(Field {
            label: "Date",
            cell: Cell::Timestamp {
                path: &["date"],
                or: "No date",
            },
        }),
        Item::Field(Field {
            label: "Assigned To",
            cell: Cell::FirstOf {
                paths: &[&["assigned_to", "name"], &["assigned_to_name"]],
                or: "Unassigned",
            },
        }),
        Item::Field(Field {
            label: "Text",
            cell: Cell::Text {
                path: &["text"],
                or: "No text",
            },
        }),
        Item::Field(Field {
            label: "Lead",
            cell: Cell::FirstOf {
                paths: &[&["lead", "display_name"], &["lead_name"]],
                or: "No lead",
            },
        }),
        Item::Field(Field {
            label: "Related Object",
            cell: Cell::Text {
                path: &["object_type"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Related Object ID",
            cell: Cell::Text {
                path: &["object_id"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Related Emails",
            cell: Cell::Join {
                path: &["emails"],
                item: &[Piece::Cell(Cell::FirstOf {
                    paths: &[&[], &["email"]],
                    or: "Unknown",
                })],
                sep: ", ",
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Phone",
            cell: Cell::Text {
                path: &["phone"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Local Phone",
            cell: Cell::Text {
                path: &["local_phone"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Voicemail Duration",
            cell: Cell::Suffixed {
                path: &["voicemail_duration"],
                suffix: "s",
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Voicemail URL",
            cell: Cell::Text {
                path: &["voicemail_url"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Attachments",
            cell: Cell::Join {
                path: &["attachments"],
                item: &[Piece::Cell(Cell::Text {
                    path: &["filename"],
                    or: "Unnamed attachment",
                })],
                sep: ", ",
                or: "No attachments",
            },
        }),
    ],
    aggregates: &[],
};

pub static OPPORTUNITY: Layout = Layout {
    heading: Some("Opportunity:"),
    plural: "opportunities",
    items: &[
        Item::Field(Field {
            label: "ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Lead",
            cell: Cell::FirstOf {
                paths: &[&["lead_name"], &["lead_id"]],
                or: "No lead",
            },
        }),
        Item::Field(Field {
            label: "Contact",
            cell: Cell::FirstOf {
                paths: &[&["contact_name"], &["contact_id"]],
                or: "No contact",
            },
        }),
        Item::Field(Field {
            label: "Status",
            cell: Cell::Text {
                path: &["status_label"],
                or: "No status",
            },
        }),
        Item::Field(Field {
            label: "Status Type",
            cell: Cell::Text {
                path: &["status_type"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Value",
            cell: Cell::MinorUnits {
                path: &["value"],
                period: Some((&["value_period"], "one_time")),
            },
        }),
        Item::Field(Field {
            label: "Confidence",
            cell: Cell::Suffixed {
                path: &["confidence"],
                suffix: "%",
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Assigned To",
            cell: Cell::FirstOf {
                paths: &[&["user_name"], &["user_id"]],
                or: "Unassigned",
            },
        }),
        Item::Field(Field {
            label: "Note",
            cell: Cell::Text {
                path: &["note"],
                or: "No note",
            },
        }),
        Item::Field(Field {
            label: "Date Won",
            cell: Cell::Timestamp {
                path: &["date_won"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Created",
            cell: Cell::Timestamp {
                path: &["date_created"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Updated",
            cell: Cell::Timestamp {
                path: &["date_updated"],
                or: "Unknown",
            },
        }),
    ],
    aggregates: &[
        Field {
            label: "Total Value (One Time)",
            cell: Cell::MinorUnits {
                path: &["total_value_one_time"],
                period: None,
            },
        },
        Field {
            label: "Total Value (Monthly)",
            cell: Cell::MinorUnits {
                path: &["total_value_monthly"],
                period: None,
            },
        },
        Field {
            label: "Total Value (Annual)",
            cell: Cell::MinorUnits {
                path: &["total_value_annual"],
                period: None,
            },
        },
        Field {
            label: "Total Value (Annualized)",
            cell: Cell::MinorUnits {
                path: &["total_value_annualized"],
                period: None,
            },
        },
        Field {
            label: "Expected Value (Annualized)",
            cell: Cell::MinorUnits {
                path: &["expected_value_annualized"],
                period: None,
            },
        },
        Field {
            label: "Count By Value Period",
            cell: Cell::Pairs {
                path: &["count_by_value_period"],
                or: "None",
            },
        },
    ],
};

pub static CALL_ACTIVITY: Layout = Layout {
    heading: Some("Call Activity:"),
    plural: "calls",
    items: &[
        Item::Field(Field {
            label: "ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Lead ID",
            cell: Cell::Text {
                path: &["lead_id"],
                or: "No lead",
            },
        }),
        Item::Field(Field {
            label: "Contact ID",
            cell: Cell::Text {
                path: &["contact_id"],
                or: "No contact",
            },
        }),
        Item::Field(Field {
            label: "User",
            cell: Cell::FirstOf {
                paths: &[&["user_name"], &["created_by_name"], &["user_id"]],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Direction",
            cell: Cell::Text {
                path: &["direction"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Status",
            cell: Cell::Text {
                path: &["status"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Disposition",
            cell: Cell::Text {
                path: &["disposition"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Duration",
            cell: Cell::Suffixed {
                path: &["duration"],
                suffix: "s",
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Phone",
            cell: Cell::Text {
                path: &["phone"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Local Phone",
            cell: Cell::Text {
                path: &["local_phone"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Cost",
            cell: Cell::Cents {
                path: &["cost"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Note",
            cell: Cell::Text {
                path: &["note"],
                or: "No note",
            },
        }),
        Item::Field(Field {
            label: "Recording URL",
            cell: Cell::Text {
                path: &["recording_url"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Voicemail URL",
            cell: Cell::Text {
                path: &["voicemail_url"],
                or: "N/A",
            },
        }),
        Item::Field(Field {
            label: "Created",
            cell: Cell::Timestamp {
                path: &["date_created"],
                or: "Unknown",
            },
        }),
    ],
    aggregates: &[
        Field {
            label: "Total Duration",
            cell: Cell::Suffixed {
                path: &["total_duration"],
                suffix: "s",
                or: "0s",
            },
        },
        Field {
            label: "Total Cost",
            cell: Cell::Cents {
                path: &["total_cost"],
                or: "N/A",
            },
        },
    ],
};

pub static USER: Layout = Layout {
    heading: Some("User:"),
    plural: "users",
    items: &[
        Item::Field(Field {
            label: "ID",
            cell: Cell::Text {
                path: &["id"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Name",
            cell: Cell::Words {
                paths: &[&["first_name"], &["last_name"]],
                or: "No name",
            },
        }),
        Item::Field(Field {
            label: "Email",
            cell: Cell::Text {
                path: &["email"],
                or: "No email",
            },
        }),
        Item::Field(Field {
            label: "Organizations",
            cell: Cell::Count {
                path: &["organizations"],
            },
        }),
        Item::Field(Field {
            label: "Created",
            cell: Cell::Timestamp {
                path: &["date_created"],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Updated",
            cell: Cell::Timestamp {
                path: &["date_updated"],
                or: "Unknown",
            },
        }),
    ],
    aggregates: &[],
};

pub static USER_AVAILABILITY: Layout = Layout {
    heading: None,
    plural: "user availability records",
    items: &[
        Item::Field(Field {
            label: "User ID",
            cell: Cell::FirstOf {
                paths: &[&["user_id"], &["id"]],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Name",
            cell: Cell::FirstOf {
                paths: &[&["user_name"], &["name"]],
                or: "No name",
            },
        }),
        Item::Field(Field {
            label: "Status",
            cell: Cell::FirstOf {
                paths: &[&["status"], &["availability", "status"]],
                or: "Unknown",
            },
        }),
        Item::Field(Field {
            label: "Active Calls",
            cell: Cell::Count {
                path: &["active_calls"],
            },
        }),
    ],
    aggregates: &[],
};
