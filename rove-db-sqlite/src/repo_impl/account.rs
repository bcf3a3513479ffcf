use super::*;

impl From<models::Account> for Account {
    fn from(from: models::Account) -> Self {
        let models::Account {
            id,
            user_name,
            location,
            first_name,
            last_name,
            password,
        } = from;
        Self {
            id: id.into(),
            user_name,
            location,
            first_name,
            last_name,
            password: Password::from_hash(password),
        }
    }
}

impl_repo! {
    AccountRepo {
        write {
            fn create_account(&self, account: &NewAccount) -> Result<AccountId>;
            fn update_account(&self, account: &Account) -> Result<()>;
            fn delete_account(&self, id: AccountId) -> Result<()>;
        }
        read {
            fn get_account(&self, id: AccountId) -> Result<Account>;
            fn try_get_account_by_user_name(&self, user_name: &str) -> Result<Option<Account>>;
        }
    }
}

fn create_account(conn: &mut SqliteConnection, account: &NewAccount) -> Result<AccountId> {
    let new_account = models::NewAccount {
        user_name: &account.user_name,
        location: &account.location,
        first_name: &account.first_name,
        last_name: &account.last_name,
        password: account.password.as_hash(),
    };
    diesel::insert_into(schema::account::table)
        .values(&new_account)
        .execute(conn)
        .map_err(from_diesel_err)?;
    last_insert_id(conn).map(Into::into)
}

fn update_account(conn: &mut SqliteConnection, account: &Account) -> Result<()> {
    use schema::account::dsl;
    let count = diesel::update(dsl::account.filter(dsl::id.eq(account.id.to_inner())))
        .set((
            dsl::user_name.eq(&account.user_name),
            dsl::location.eq(&account.location),
            dsl::first_name.eq(&account.first_name),
            dsl::last_name.eq(&account.last_name),
            dsl::password.eq(account.password.as_hash()),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn delete_account(conn: &mut SqliteConnection, id: AccountId) -> Result<()> {
    use schema::account::dsl;
    let count = diesel::delete(dsl::account.filter(dsl::id.eq(id.to_inner())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    expect_affected(count)
}

fn get_account(conn: &mut SqliteConnection, id: AccountId) -> Result<Account> {
    use schema::account::dsl;
    Ok(dsl::account
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::Account>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn try_get_account_by_user_name(
    conn: &mut SqliteConnection,
    user_name: &str,
) -> Result<Option<Account>> {
    use schema::account::dsl;
    Ok(dsl::account
        .filter(dsl::user_name.eq(user_name))
        .first::<models::Account>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
