//! A bitcoin wallet.

use std::fmt;

use thiserror::Error;

/// An amount of bitcoin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bitcoin(pub u64);

impl fmt::Display for Bitcoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BTC", self.0)
    }
}

/// Errors returned by [`Wallet::withdraw`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WalletError {
    /// The wallet holds less than the requested amount.
    #[error("cannot withdraw, insufficient funds")]
    InsufficientFunds { requested: Bitcoin, available: Bitcoin },
}

/// Holds a balance of bitcoin.
#[derive(Debug, Default)]
pub struct Wallet {
    balance: Bitcoin,
}

impl Wallet {
    /// Creates an empty wallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the balance.
    pub fn deposit(&mut self, amount: Bitcoin) {
        self.balance = Bitcoin(self.balance.0.saturating_add(amount.0));
    }

    /// Removes `amount` from the balance.
    ///
    /// Fails without touching the balance when `amount` exceeds it.
    pub fn withdraw(&mut self, amount: Bitcoin) -> Result<(), WalletError> {
        match self.balance.0.checked_sub(amount.0) {
            Some(remaining) => {
                self.balance = Bitcoin(remaining);
                Ok(())
            }
            None => Err(WalletError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            }),
        }
    }

    /// Returns the current balance.
    pub fn balance(&self) -> Bitcoin {
        self.balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit() {
        let mut wallet = Wallet::new();
        wallet.deposit(Bitcoin(10));
        assert_eq!(wallet.balance(), Bitcoin(10));
    }

    #[test]
    fn test_withdraw_with_funds() {
        let mut wallet = Wallet::new();
        wallet.deposit(Bitcoin(20));

        wallet.withdraw(Bitcoin(10)).unwrap();

        assert_eq!(wallet.balance(), Bitcoin(10));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut wallet = Wallet::new();
        wallet.deposit(Bitcoin(20));

        wallet.withdraw(Bitcoin(20)).unwrap();

        assert_eq!(wallet.balance(), Bitcoin(0));
    }

    #[test]
    fn test_withdraw_insufficient_funds() {
        let mut wallet = Wallet::new();
        wallet.deposit(Bitcoin(20));

        let err = wallet.withdraw(Bitcoin(100)).unwrap_err();

        assert_eq!(
            err,
            WalletError::InsufficientFunds {
                requested: Bitcoin(100),
                available: Bitcoin(20),
            }
        );
        assert_eq!(err.to_string(), "cannot withdraw, insufficient funds");
        assert_eq!(wallet.balance(), Bitcoin(20));
    }

    #[test]
    fn test_bitcoin_display() {
        assert_eq!(Bitcoin(10).to_string(), "10 BTC");
    }
}
