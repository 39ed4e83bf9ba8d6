use super::LinkRecord;

const SEED: &[(&str, &str, &str, &str)] = &[
    (
        "3c62d5dd-b656-4d6b-b6a9-010ad3820f3d",
        "MBC 1",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc1",
        "https://www.elahmad.com/tv/mobiletv/images/mbc1.jpg?v=7",
    ),
    (
        "3fcf7faa-6d76-4ac7-be3c-94770fa4ccdd",
        "MBC 2",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc2",
        "https://www.elahmad.com/tv/mobiletv/images/mbc2.jpg",
    ),
    (
        "0d555225-ee49-4534-9790-8472ffa4b48a",
        "MBC 3",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc3",
        "https://www.elahmad.com/tv/mobiletv/images/mbc3.jpg",
    ),
    (
        "4bc0dc98-8672-45ff-a124-6fe3896035e3",
        "MBC 4",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc4",
        "https://www.elahmad.com/tv/mobiletv/images/mbc4.jpg",
    ),
    (
        "3dc34409-5cb9-4054-a87a-c2c1ea3a03c8",
        "MBC 5",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc5",
        "https://www.elahmad.com/tv/mobiletv/images/mbc5.jpg",
    ),
    (
        "d75934a1-f1d0-4a99-aadf-acafeb823288",
        "MBC Drama",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_drama",
        "https://www.elahmad.com/tv/mobiletv/images/mbc_drama.jpg",
    ),
    (
        "6fe29151-320b-49a3-aa8c-9f2a51490c2e",
        "MBC Drama Plus",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_drama_plus",
        "https://www.elahmad.com/tv/mobiletv/images/mbc_drama_plus.jpg",
    ),
    (
        "8ac9e906-7387-42fd-9d68-1e81b1121468",
        "MBC Maser",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_masr",
        "https://www.elahmad.com/tv/mobiletv/images/mbc_masr.jpg",
    ),
    (
        "a9fe8296-7ac5-459f-ad24-dbd80552bc61",
        "MBC Maser 2",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_masr2",
        "https://www.elahmad.com/tv/mobiletv/images/mbc_masr2.jpg",
    ),
    (
        "65fab3f7-b944-498c-9e2b-cbf4d1c4936e",
        "MBC Max",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_max",
        "https://www.elahmad.com/tv/mobiletv/images/mbc-max.jpg",
    ),
    (
        "7da5d5f5-f4aa-43b7-a90a-4ddb1a5cfc56",
        "MBC Action",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_action",
        "https://www.elahmad.com/tv/mobiletv/images/mbc_action.jpg",
    ),
    (
        "60939b1c-d433-41b4-8abe-a3df9d9318b6",
        "MBC Variety",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=mbc_variety",
        "https://www.elahmad.com/tv/mobiletv/images/mbc_variety.jpg",
    ),
    (
        "b4788897-cf49-49d2-9b33-5617d1510ba6",
        "CN Arabic",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=cnarabia",
        "https://www.elahmad.com/tv/mobiletv/images/CartoonNetwork.jpg?v=7",
    ),
    (
        "ba1cfb36-76a3-4e72-a653-41c969395c3e",
        "spacetoon",
        "https://www.elahmad.com/tv/mobiletv/glarb.php?id=spacetoon",
        "https://www.elahmad.com/tv/mobiletv/images/spacetoon.jpg?v=7",
    ),
    (
        "b408e229-a9c0-4abb-a99a-0e706f4f1e55",
        "Rotana Cinema",
        "https://www.elahmad.com/tv/live/channels.php?id=954",
        "https://www.elahmad.com/tv/mobiletv/images/rotana_cinema.jpg?v=7",
    ),
    (
        "1a39c637-9612-4e28-95e6-3326d510b19e",
        "Rotana Classic",
        "https://www.elahmad.com/tv/watchtv.php?id=rotana_classic",
        "https://www.elahmad.com/tv/mobiletv/images/rotana_classic.jpg?v=7",
    ),
    (
        "ebc21434-94f9-46ea-8708-41e42360e204",
        "Rotana Aflam+",
        "https://www.elahmad.com/tv/mobiletv/glarb.php?id=rotana_aflam",
        "https://www.elahmad.com/tv/mobiletv/images/rotana_aflam_plus.jpg?v=7",
    ),
    (
        "ecf83f17-8bee-4052-bb2d-15940dda7146",
        "Rotana Comedy",
        "https://www.elahmad.com/tv/watchtv.php?id=rotana_comedy",
        "https://www.elahmad.com/tv/mobiletv/images/rotana_comedy.jpg?v=7",
    ),
    (
        "a850646f-9a54-4b83-b799-ab00736358ff",
        "Aljazeer",
        "https://www.elahmad.com/tv/radiant.php?id=aljazeer_ar1",
        "https://www.elahmad.com/tv/mobiletv/images/aljazeera.jpg?v=7",
    ),
    (
        "f9ee4743-c0dd-439c-8360-c6257a88dbfb",
        "Aljazeera doc",
        "https://www.elahmad.com/tv/radiant.php?id=aljazeeradoc1",
        "https://www.elahmad.com/tv/mobiletv/images/aljazeera_documentaire.jpg?v=7",
    ),
    (
        "5b23ff0e-a6b3-490b-9acf-3c5de7784b26",
        "AL arabiya",
        "https://www.elahmad.com/tv/radiant.php?id=alarabiya1",
        "https://www.elahmad.com/tv/mobiletv/images/alarabiya.jpg?v=7",
    ),
    (
        "1f253aa9-201f-459a-9408-8c82555af650",
        "AL arabiya AL-hadath",
        "https://www.elahmad.com/tv/radiant.php?id=alarabiya_alhadath1",
        "https://www.elahmad.com/tv/mobiletv/images/al_arabiya_alhadath.jpg?v=7",
    ),
    (
        "e8be3b7a-5440-4ad5-9ec5-581f4cefe08e",
        "Dubai one",
        "https://www.elahmad.com/tv/radiant.php?id=dubaione",
        "https://www.elahmad.com/tv/mobiletv/images/dubai_one.jpg?v=7",
    ),
    (
        "e72085d6-b79e-45f6-8288-09d0458bc1e0",
        "Nat Geo Abu Dhabi",
        "https://www.elahmad.com/tv/radiant.php?id=natgeo_1",
        "https://www.elahmad.com/tv/mobiletv/images/national_geographic.jpg?v=7",
    ),
    (
        "fb3f8cd0-a0b4-4078-9ca6-5df95cf7c83e",
        "Roya TV",
        "https://www.elahmad.com/tv/radiant.php?id=royatv1",
        "https://www.elahmad.com/tv/mobiletv/images/royatv.jpg?v=7",
    ),
    (
        "f93fc55f-ed59-4da4-9d95-255ac022c648",
        "Syria 2",
        "https://www.elahmad.com/tv/radiant.php?id=syriatv1",
        "https://www.elahmad.com/tv/mobiletv/images/syria_althania.jpg?v=7",
    ),
    (
        "6e2c9454-ec75-4ba2-b3a3-850d45da88b1",
        "Syria",
        "https://www.elahmad.com/tv/mobiletv/glarb.php?id=syria_tv",
        "https://www.elahmad.com/tv/mobiletv/images/syria_tv.jpg?v=7",
    ),
    (
        "5e4f44d5-992c-4ff9-bdc7-3054d4d3755e",
        "Lana TV",
        "https://www.elahmad.com/tv/watchtv.php?id=lanatv",
        "https://www.elahmad.com/tv/mobiletv/images/lana_syria.jpg?v=7",
    ),
    (
        "153b6dc6-7fe9-4543-b7ed-ca831f4644a6",
        "ALikhbaria Syria",
        "https://www.elahmad.com/tv/mobiletv/glarb.php?id=alikhbaria_syria1",
        "https://www.elahmad.com/tv/mobiletv/images/alikhbaria_syria.jpg?v=7",
    ),
    (
        "e6b0468d-0c32-4b68-915c-62e970fe5503",
        "Aljadeed",
        "https://www.elahmad.com/tv/live/shahid_shaka.php?id=aljadeed",
        "https://www.elahmad.com/tv/mobiletv/images/aljadeed_tv.jpg?v=7",
    ),
    (
        "0bf51a6f-0e55-4f34-a464-8b88b1fbe1e1",
        "MTV lebanon",
        "https://www.elahmad.com/tv/watchtv.php?id=mtv_lebanon",
        "https://www.elahmad.com/tv/mobiletv/images/mtv.jpg?v=7",
    ),
    (
        "92fcbe91-8608-44ac-b5d6-47d3422821ba",
        "ON-TV",
        "https://www.elahmad.com/tv/radiant.php?id=ontv1",
        "https://www.elahmad.com/tv/mobiletv/images/ontveg.jpg?v=7",
    ),
    (
        "4f148088-d7cf-4b11-a3c1-4027531373c3",
        "TRT arabic",
        "https://www.elahmad.com/tv/radiant.php?id=trt_arabic1",
        "https://www.elahmad.com/tv/mobiletv/images/trt_arabic.jpg?v=7",
    ),
    (
        "0a645842-0b9c-49ba-8fb4-fca684165f9c",
        "RT arabic",
        "https://www.elahmad.com/tv/radiant.php?id=rt_ar1",
        "https://www.elahmad.com/tv/mobiletv/images/russia_today.jpg?v=7",
    ),
    (
        "9d201972-0663-4420-87d6-96da5d97e3d2",
        "DW arabic",
        "https://www.elahmad.com/tv/radiant.php?id=dw_ar",
        "https://www.elahmad.com/tv/mobiletv/images/dw.jpg?v=7",
    ),
];

/// Channels written on first run, in display order. Ids are fixed so that a
/// reseeded profile keeps the same identities.
pub fn seed_links() -> Vec<LinkRecord> {
    SEED.iter()
        .map(|(id, name, url, icon_url)| LinkRecord::new(*id, *name, *url, *icon_url))
        .collect()
}
