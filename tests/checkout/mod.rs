mod checkout_missing_branch_fails;
