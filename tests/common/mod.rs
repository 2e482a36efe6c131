//! Shared fixtures for integration tests.

#![allow(dead_code)]

/// One post as it appears on a channel preview page.
pub struct PostFixture<'a> {
    pub channel: &'a str,
    pub id: u32,
    pub text: &'a str,
    pub datetime: &'a str,
    pub photo: Option<&'a str>,
    pub views: &'a str,
}

impl PostFixture<'_> {
    pub fn render(&self) -> String {
        let media = self
            .photo
            .map(|url| {
                format!(
                    r#"<a class="tgme_widget_message_photo_wrap 5226998546_456239040" href="https://t.me/{}/{}" style="width:800px;background-image:url('{url}')"></a>"#,
                    self.channel, self.id
                )
            })
            .unwrap_or_default();

        format!(
            r#"
<div class="tgme_widget_message_wrap js-widget_message_wrap">
  <div class="tgme_widget_message text_not_supported_wrap js-widget_message" data-post="{channel}/{id}" data-view="eyJjIjotMTAwfQ">
    <div class="tgme_widget_message_user"><a href="https://t.me/{channel}"><i class="tgme_widget_message_user_photo bgcolor0" data-content="A"><img src="https://cdn4.telesco.pe/file/avatar_{channel}.jpg"></i></a></div>
    <div class="tgme_widget_message_bubble">
      <div class="tgme_widget_message_author accent_color"><a class="tgme_widget_message_owner_name" href="https://t.me/{channel}"><span dir="auto">Agrosanoat</span></a></div>
      {media}
      <div class="tgme_widget_message_text js-message_text" dir="auto">{text}</div>
      <div class="tgme_widget_message_footer compact js-message_footer">
        <div class="tgme_widget_message_info short js-message_info">
          <span class="tgme_widget_message_views">{views}</span>
          <span class="tgme_widget_message_meta"><a class="tgme_widget_message_date" href="https://t.me/{channel}/{id}"><time datetime="{datetime}" class="time">10:00</time></a></span>
        </div>
      </div>
    </div>
  </div>
</div>"#,
            channel = self.channel,
            id = self.id,
            text = self.text,
            views = self.views,
            datetime = self.datetime,
        )
    }
}

/// Wrap rendered posts in a preview page shell.
pub fn channel_page(posts: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Agrosanoat – Telegram</title></head>
<body class="widget_frame_base tgme_webpreview_frame">
<header class="tgme_header"><img class="tgme_page_photo_image" src="https://cdn4.telesco.pe/file/channel_logo.jpg"></header>
<main class="tgme_main"><section class="tgme_channel_history js-message_history">
{}
</section></main>
</body>
</html>"#,
        posts.concat()
    )
}

/// A page with `count` text posts, one per day of March 2024.
pub fn numbered_page(channel: &str, count: u32) -> String {
    let posts: Vec<String> = (1..=count)
        .map(|id| {
            PostFixture {
                channel,
                id,
                text: &format!("Post {id}"),
                datetime: &format!("2024-03-{id:02}T09:00:00+05:00"),
                photo: None,
                views: "1.2K",
            }
            .render()
        })
        .collect();
    channel_page(&posts)
}
