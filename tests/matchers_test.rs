use email_contacts::matchers::*;
use email_contacts::{PhoneNumber, PhoneType};

// --- Reply headers ---

#[test]
fn test_reply_header() {
    let header = match_reply_header("On Jun 15, 9:06 am, Rob James <james@gmail.com> wrote:").unwrap();
    assert_eq!(header.name, "Rob James");
    assert_eq!(header.email, "james@gmail.com");
}

#[test]
fn test_reply_header_requires_brackets_and_wrote() {
    assert!(match_reply_header("Rob James james@gmail.com wrote:").is_none());
    assert!(match_reply_header("Rob James <james@gmail.com>").is_none());
}

#[test]
fn test_relaxed_header() {
    assert!(looks_like_reply_header("Rob James <james@gmail.com> wrote:"));
    assert!(looks_like_reply_header("drllau drlawrence@gmail.com wrote: something"));
    assert!(!looks_like_reply_header("james@gmail.com"));
    assert!(!looks_like_reply_header("email: bob@x.com, site: www.x.com"));
}

// --- Social handles ---

#[test]
fn test_skype() {
    assert_eq!(match_skype("Skype: rob.james123").as_deref(), Some("rob.james123"));
    assert_eq!(match_skype("skype:robjames").as_deref(), Some("robjames"));
    assert!(match_skype("Skype: rob").is_none());
    assert!(match_skype("rob.james123").is_none());
}

#[test]
fn test_twitter_labelled() {
    assert_eq!(match_twitter("Twitter: @robjames").as_deref(), Some("@robjames"));
    assert_eq!(match_twitter("twitter handle: rob_j").as_deref(), Some("rob_j"));
}

#[test]
fn test_twitter_bare_handle_at_line_start() {
    assert_eq!(match_twitter("@robjames").as_deref(), Some("@robjames"));
    assert!(match_twitter("ping me @robjames").is_none());
    assert!(match_twitter("Rob").is_none());
}

// --- Phones ---

#[test]
fn test_mobile_phone() {
    assert_eq!(
        match_phones("Mobile: 0791 234 567"),
        vec![PhoneNumber::new(PhoneType::Mobile, "0791 234 567")]
    );
}

#[test]
fn test_phone_labels() {
    assert_eq!(match_phones("(M) 0412 345 678")[0].phone_type, PhoneType::Mobile);
    assert_eq!(match_phones("m: 0412345678")[0].phone_type, PhoneType::Mobile);
    assert_eq!(match_phones("Fax: 02 9999 1234")[0].phone_type, PhoneType::Fax);
    assert_eq!(match_phones("f: 02 9999 1234")[0].phone_type, PhoneType::Fax);
    assert_eq!(match_phones("Phone: 02 9999 1234")[0].phone_type, PhoneType::Work);
    assert_eq!(match_phones("0412 345 678")[0].phone_type, PhoneType::Work);
}

#[test]
fn test_several_phones_on_one_line() {
    let phones = match_phones("Office: 02 9999 1234 Mobile: 0412 345 678");
    assert_eq!(
        phones,
        vec![
            PhoneNumber::new(PhoneType::Work, "02 9999 1234"),
            PhoneNumber::new(PhoneType::Mobile, "0412 345 678"),
        ]
    );
}

#[test]
fn test_duplicate_phones_collapsed() {
    let phones = match_phones("Tel: 0412 345 678 Tel: 0412 345 678");
    assert_eq!(phones.len(), 1);
}

#[test]
fn test_no_phone() {
    assert!(match_phones("Rob James").is_empty());
}

#[test]
fn test_classify_phone() {
    assert_eq!(classify_phone("Cell/Mobile: "), PhoneType::Mobile);
    assert_eq!(classify_phone(" M "), PhoneType::Mobile);
    assert_eq!(classify_phone("(F) "), PhoneType::Fax);
    assert_eq!(classify_phone("Num: "), PhoneType::Work);
    assert_eq!(classify_phone(" F "), PhoneType::Fax);
    assert_eq!(classify_phone("Level F "), PhoneType::Work);
    assert_eq!(classify_phone("Tel M "), PhoneType::Work);
    assert_eq!(classify_phone(""), PhoneType::Work);
}

// --- Email and URL ---

#[test]
fn test_email() {
    assert_eq!(
        match_email("Email: rob.james@example.co.uk").as_deref(),
        Some("rob.james@example.co.uk")
    );
    assert!(match_email("no address here").is_none());
}

#[test]
fn test_url() {
    assert_eq!(match_url("www.example.com").as_deref(), Some("www.example.com"));
    assert_eq!(
        match_url("Blog: http://robjames.net/blog").as_deref(),
        Some("http://robjames.net/blog")
    );
}

#[test]
fn test_url_skips_email_domains() {
    assert_eq!(
        match_url("email: bob@x.com, site: www.x.com").as_deref(),
        Some("www.x.com")
    );
    assert!(match_url("james@gmail.com").is_none());
}

#[test]
fn test_url_after_non_breaking_space() {
    assert_eq!(
        match_url("Web:\u{a0}www.example.com").as_deref(),
        Some("www.example.com")
    );
    assert!(match_url("mail:\u{a0}bob@x.com").is_none());
}

#[test]
fn test_matchers_are_pure() {
    let line = "Office: 02 9999 1234 Mobile: 0412 345 678";
    assert_eq!(match_phones(line), match_phones(line));
}
