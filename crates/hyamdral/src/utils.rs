use hyamdral_common::auth::{AuthError, AuthErrorKind};
use hyamdral_store::ContentStore;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::auth::{AuthProvider, AuthUser};

/// Store pre-populated with a small representative catalog. Keys are
/// fixed so tests can address records directly.
pub(crate) async fn seeded_store() -> ContentStore {
    ContentStore::from_value(json!({
        "content": {
            "categories": {
                "main": {
                    "TECH": {"name": "Технологи", "icon": "Smartphone", "status": "Active"},
                    "FASHION": {"name": "Загвар", "icon": "Shirt", "status": "Active"},
                    "HIDDEN": {"name": "Хаалттай", "icon": "Layers", "status": "Inactive"},
                },
                "sub": {
                    "sub-phones": {"name": "Утас", "parentId": "TECH", "status": "Active"},
                    "sub-shoes": {"name": "Гутал", "parentId": "FASHION", "status": "Active"},
                    "sub-old": {"name": "Хуучин", "parentId": "TECH", "status": "Inactive"},
                },
                "panel": {
                    "panel-tech": {
                        "name": "Техник технологи",
                        "categoryId": "TECH",
                        "description": "Шинэ үеийн төхөөрөмжүүд",
                        "coverImage": "data:image/jpeg;base64,cover",
                    },
                },
                "products": {
                    "rp-galaxy": {
                        "name": "Galaxy S24",
                        "store": "Shoppy",
                        "category": "TECH",
                        "subCategory": "sub-phones",
                        "originalPrice": "4,500,000",
                        "price": "3,600,000",
                        "discount": 20,
                        "mainImage": "data:image/jpeg;base64,galaxy",
                        "description": "Флагман утас",
                    },
                    "rp-headset": {
                        "name": "Чихэвч",
                        "store": "Emart",
                        "category": "TECH",
                        "subCategory": "",
                        "originalPrice": "150,000",
                        "price": "135,000",
                        "discount": 10,
                        "image": "data:image/png;base64,legacy",
                    },
                },
            },
            "featured": {
                "panel": {
                    "fb-live": {"title": "Өдрийн онцлох", "isActive": true, "bgImage": "data:image/jpeg;base64,bg"},
                    "fb-off": {"title": "Хуучирсан", "isActive": false},
                },
                "products": {
                    "fp-watch": {
                        "name": "Ухаалаг цаг",
                        "store": "Shoppy",
                        "originalPrice": "160,000",
                        "price": "120,000",
                        "discount": 25,
                        "mainImage": "data:image/png;base64,watch",
                    },
                    "fp-bag": {
                        "name": "Цүнх",
                        "store": "Emart",
                        "originalPrice": "90,000",
                        "price": "80,000",
                        "discount": 11,
                        "mainImage": "data:image/png;base64,bag",
                    },
                    "fp-case": {
                        "name": "Утасны хамгаалалт",
                        "store": "Shoppy",
                        "originalPrice": "90,000",
                        "price": "60,000",
                        "discount": 33,
                        "mainImage": "data:image/png;base64,case",
                    },
                },
            },
            "stores": {
                "top": {
                    "ts-emart": {
                        "name": "Emart",
                        "description": "Солонгос сүлжээ",
                        "link": "https://emartmall.mn",
                        "coverImage": "data:image/jpeg;base64,emart",
                    },
                },
                "others": {
                    "os-nomin": {
                        "name": "Номин",
                        "siteLink": "https://nomin.mn",
                        "dealsCount": 12,
                        "branches": [{"name": "Юнэскогийн салбар", "link": "https://nomin.mn"}],
                    },
                    "os-bsb": {"name": "БСБ", "siteLink": "https://bsb.mn", "dealsCount": 4},
                },
            },
            "home": {
                "bestSellers": {
                    "bs-airpods": {
                        "name": "Airpods Pro",
                        "price": "450,000₮",
                        "soldCount": "340",
                        "storeLogo": "data:image/png;base64,logo",
                    },
                },
            },
        },
    }))
}

struct Account {
    password: String,
    uid: String,
}

/// In-memory stand-in for the external identity service, with the same
/// error kinds deployments observe.
#[derive(Default)]
pub(crate) struct MockAuth {
    accounts: Mutex<HashMap<String, Account>>,
    profiles: Mutex<HashMap<String, (Option<String>, Option<String>)>>,
    next_uid: AtomicUsize,
}

impl MockAuth {
    pub fn with_account(email: &str, password: &str) -> Self {
        let auth = Self::default();
        auth.accounts.lock().unwrap().insert(
            email.to_owned(),
            Account {
                password: password.to_owned(),
                uid: "uid-seed".to_owned(),
            },
        );
        auth
    }

    /// (display name, photo) of a principal, for assertions.
    pub fn profile_of(&self, uid: &str) -> (Option<String>, Option<String>) {
        self.profiles
            .lock()
            .unwrap()
            .get(uid)
            .cloned()
            .unwrap_or_default()
    }

    fn user_for(&self, email: &str, uid: &str) -> AuthUser {
        let (display_name, photo_url) = self.profile_of(uid);
        AuthUser {
            uid: uid.to_owned(),
            email: email.to_owned(),
            display_name,
            photo_url,
            access_token: format!("test-token-{uid}"),
        }
    }
}

impl AuthProvider for MockAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let accounts = self.accounts.lock().unwrap();
        let Some(account) = accounts.get(email) else {
            return Err(AuthError::new(
                AuthErrorKind::UserNotFound,
                "auth/user-not-found",
            ));
        };
        if account.password != password {
            return Err(AuthError::new(
                AuthErrorKind::WrongPassword,
                "auth/wrong-password",
            ));
        }
        let uid = account.uid.clone();
        drop(accounts);
        Ok(self.user_for(email, &uid))
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, AuthError> {
        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(AuthError::new(
                AuthErrorKind::EmailAlreadyInUse,
                "auth/email-already-in-use",
            ));
        }
        if password.len() < 6 {
            return Err(AuthError::new(
                AuthErrorKind::WeakPassword,
                "auth/weak-password",
            ));
        }
        let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::Relaxed));
        accounts.insert(
            email.to_owned(),
            Account {
                password: password.to_owned(),
                uid: uid.clone(),
            },
        );
        drop(accounts);
        Ok(self.user_for(email, &uid))
    }

    async fn reauthenticate(&self, email: &str, current_password: &str) -> Result<(), AuthError> {
        self.sign_in(email, current_password).await.map(|_| ())
    }

    async fn update_password(&self, email: &str, new_password: &str) -> Result<(), AuthError> {
        let mut accounts = self.accounts.lock().unwrap();
        match accounts.get_mut(email) {
            Some(account) => {
                account.password = new_password.to_owned();
                Ok(())
            }
            None => Err(AuthError::new(
                AuthErrorKind::UserNotFound,
                "auth/user-not-found",
            )),
        }
    }

    async fn update_profile(
        &self,
        uid: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<(), AuthError> {
        let mut profiles = self.profiles.lock().unwrap();
        let entry = profiles.entry(uid.to_owned()).or_default();
        if let Some(name) = display_name {
            entry.0 = Some(name.to_owned());
        }
        if let Some(photo) = photo_url {
            entry.1 = Some(photo.to_owned());
        }
        Ok(())
    }
}
