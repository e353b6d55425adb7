use parishdesk_models::MenuItem;

/// The dashboard sidebar, in display order.
///
/// Icon names are lucide identifiers; the dashboard resolves them.
pub fn default_navigation_items() -> Vec<MenuItem> {
    [
        ("dashboard", "Dashboard", "/dashboard", "LayoutGrid"),
        ("church-management", "Church Management", "/church-management", "UserCog"),
        ("wards", "Wards", "/wards", "Home"),
        ("families", "Families", "/families", "Users"),
        ("prayer-requests", "Prayer Requests", "/prayer-requests", "Heart"),
        ("events", "Events", "/events", "Calendar"),
        ("posts", "Posts", "/posts", "FileText"),
        ("communities", "Communities", "/communities", "MessageSquare"),
        ("calendar", "Calendar", "/calendar", "Calendar"),
        ("notifications", "Notifications", "/notifications", "Bell"),
        ("sacraments", "Sacraments", "/sacraments", "BookOpen"),
        ("certificates", "Certificates", "/certificates", "Award"),
        ("class-management", "Class Management", "/class-management", "GraduationCap"),
        ("announcements", "Announcements", "/announcements", "Megaphone"),
        ("bible", "Bible", "/bible", "Library"),
        ("donations", "Donations", "/donations", "DollarSign"),
        ("family", "Family Management", "/family", "Users"),
        ("parish", "Parish Settings", "/parish", "UserCog"),
        ("prayers", "Prayers", "/prayers", "Heart"),
        ("roles", "Roles & Permissions", "/roles", "Shield"),
        ("users", "Users", "/users", "Users"),
        ("ward", "Ward Management", "/ward", "MapPin"),
    ]
    .into_iter()
    .map(|(key, label, href, icon)| MenuItem::new(key, label, href).with_icon(icon))
    .collect()
}
