//! Wiremock stand-in for the login host, the page and the listing endpoint.

use wiremock::matchers::{body_string_contains, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const EMAIL: &str = "me@example.com";
pub const PASSWORD: &str = "s3cret pass";
pub const USER_ID: &str = "100001";
pub const SECRET_TOKEN: &str = "AQH-token:42";
pub const PAGE_NAME: &str = "mypage";
pub const PAGE_ID: &str = "987654321";
pub const FANS_PATH: &str = "/pages/admin/people_and_other_pages/entquery/";

pub const EMPTY_BATCH: &str = "for (;;);{'payload':{'data':[]}}";

/// Two likers; the second name needs CSV quoting.
pub const TWO_LIKERS: &str = "for (;;);{'payload':{'data':[\
{'profile':{'id':'111','name':'Alice Example'},'timestamp':1500000000},\
{'profile':{'id':'222','name':'O\\'Neil, Bob'},'timestamp':1500000100}\
]}}";

/// Expected CSV for the [`TWO_LIKERS`] run with no followers.
pub const TWO_LIKERS_CSV: &str = "TIME,KIND,ID,NAME,LINK\n\
1500000000,Like,111,Alice Example,https://www.facebook.com/111\n\
1500000100,Like,222,\"O'Neil, Bob\",https://www.facebook.com/222\n";

/// Mounts a successful login for [`EMAIL`] issuing `c_user=USER_ID`.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login.php"))
        .and(body_string_contains("email=me%40example.com"))
        .and(body_string_contains("pass=s3cret+pass"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", "/home.php")
                .append_header("set-cookie", "datr=abc123; Path=/; HttpOnly")
                .append_header("set-cookie", format!("c_user={USER_ID}; Path=/"))
                .append_header("set-cookie", "xs=xs-value; Path=/; HttpOnly"),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/{USER_ID}")))
        .and(header_regex("cookie", &format!("c_user={USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><form><input type="hidden" name="fb_dtsg" value="{SECRET_TOKEN}" autocomplete="off" /></form></html>"#
        )))
        .mount(server)
        .await;
}

/// Mounts the page markup for [`PAGE_NAME`].
pub async fn mount_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/{PAGE_NAME}")))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><head><meta property="al:android:url" content="fb://page/{PAGE_ID}?referrer=app_link" /></head></html>"#
        )))
        .mount(server)
        .await;
}

/// Mounts one listing response for `edge_key` at `offset`.
pub async fn mount_batch(server: &MockServer, edge_key: &str, offset: usize, body: &str) {
    Mock::given(method("POST"))
        .and(path(FANS_PATH))
        .and(body_string_contains(format!("query_edge_key={edge_key}")))
        .and(body_string_contains(format!("page_id={PAGE_ID}")))
        .and(body_string_contains(format!("&offset={offset}&")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.to_string()))
        .expect(1)
        .mount(server)
        .await;
}

/// Likers: two records then an empty batch. Followers: empty at once.
pub async fn mount_two_likers(server: &MockServer) {
    mount_batch(server, "PEOPLE_WHO_LIKE_THIS_PAGE", 0, TWO_LIKERS).await;
    mount_batch(server, "PEOPLE_WHO_LIKE_THIS_PAGE", 1000, EMPTY_BATCH).await;
    mount_batch(server, "PEOPLE_WHO_FOLLOW_THIS_PAGE", 0, EMPTY_BATCH).await;
}
